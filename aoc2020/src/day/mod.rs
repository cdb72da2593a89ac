pub mod day01;
pub mod day02;
pub mod day05;
pub mod day06;
