use colored::Colorize;

pub fn print_banner() {
    println!("{:━^60}", " GaiaAI Chatbot ".yellow());
    println!("Created by: {}", "Moei, modified by Shiro-Kuro".bold().green());
    println!(
        "Asks a fixed set of questions in random order, {}.",
        "forever".bold().cyan()
    );
    println!("Stop it with {}.", "Ctrl+C".bold().red());
    println!("{:━^60}", "".yellow());
}
