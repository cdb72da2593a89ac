use colored::Colorize;
use std::{fmt::Display, time::Duration};

pub const NUMBER_DASHES: usize = 80;

pub fn print_header() {
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
    println!(
        "{} {} {}",
        "-".repeat(NUMBER_DASHES / 2 - 10).red().bold(),
        "Advent of Code 2020".bold(),
        "-".repeat(NUMBER_DASHES / 2 - 11).red().bold()
    );
    println!("{}", "-".repeat(NUMBER_DASHES).green().bold());
}

pub fn print_day(day: usize) {
    println!("- {}", format!("Day {:02}", day).bold());
}

pub fn print_part<T: Display>(part: usize, answer: &T) {
    let answer = answer.to_string();
    if part == 1 {
        println!("\n{}: {}", "Part 1".red().bold(), answer.red().bold());
    } else {
        println!("{}: {}", "Part 2".green().bold(), answer.green().bold());
    }
}

pub fn print_time(d: Duration) {
    println!(
        "- {}.{}{}{:03} {}",
        format!("{:03}", d.as_secs()).bright_red(),
        format!("{:03}", d.subsec_millis()).red(),
        format!("{:03}", d.subsec_micros() % 1_000).yellow(),
        format!("{}", d.subsec_nanos() % 1_000).green(),
        "seconds".bold(),
    );
}
