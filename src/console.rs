//! Interactive decision provider backed by stdin.

use std::io::{self, BufRead, Write};

use hoardscan_core::{DecisionProvider, DiffRegion, QuizAnswer, RegionChoice};

/// Prompts on stdout and reads answers line by line from stdin.
///
/// Confirmations default to no, so a closed stdin never mutates
/// anything. Region and quiz prompts re-ask until the input parses.
pub struct ConsoleDecisions;

impl ConsoleDecisions {
    pub fn new() -> Self {
        Self
    }

    fn read_line(&self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl Default for ConsoleDecisions {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionProvider for ConsoleDecisions {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = io::stdout().flush();
        match self.read_line() {
            Some(answer) => matches!(answer.to_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }

    fn resolve_region(&mut self, region: &DiffRegion) -> RegionChoice {
        println!();
        println!("Difference {}:", region.index + 1);
        if region.left.is_empty() {
            println!("  left  (line {}): <nothing>", region.left_start);
        } else {
            for (i, line) in region.left.iter().enumerate() {
                println!("  left  {:>4} | {line}", region.left_start + i);
            }
        }
        if region.right.is_empty() {
            println!("  right (line {}): <nothing>", region.right_start);
        } else {
            for (i, line) in region.right.iter().enumerate() {
                println!("  right {:>4} | {line}", region.right_start + i);
            }
        }
        if let Some(hint) = &region.inline_hint {
            println!("  inline: {hint}");
        }

        loop {
            print!("Keep [1] left, [2] right, [3] both, [4] custom text: ");
            let _ = io::stdout().flush();
            let Some(answer) = self.read_line() else {
                return RegionChoice::Left;
            };
            match answer.as_str() {
                "1" => return RegionChoice::Left,
                "2" => return RegionChoice::Right,
                "3" => return RegionChoice::Both,
                "4" => {
                    print!("Replacement text: ");
                    let _ = io::stdout().flush();
                    let text = self.read_line().unwrap_or_default();
                    return RegionChoice::Custom(text);
                }
                _ => println!("Please enter 1, 2, 3 or 4."),
            }
        }
    }

    fn quiz_answer(&mut self, number: usize, question: &str) -> QuizAnswer {
        println!();
        println!("{number}. {question}");
        loop {
            print!("   [0] never  [1] sometimes  [2] always: ");
            let _ = io::stdout().flush();
            let Some(answer) = self.read_line() else {
                return QuizAnswer::Never;
            };
            match QuizAnswer::parse(&answer) {
                Some(parsed) => return parsed,
                None => println!("   Please answer 0, 1 or 2."),
            }
        }
    }
}
