//! Categories command
//!
//! Lists the fixed category set in the order the add form cycles through it.

use crate::models::Category;

/// One category name per line, as accepted by `--expense`
pub fn format_categories() -> String {
    let mut output = String::new();
    for (index, category) in Category::ALL.iter().enumerate() {
        let marker = if *category == Category::default() {
            " (default)"
        } else {
            ""
        };
        output.push_str(&format!("{}. {}{}\n", index + 1, category, marker));
    }
    output
}

/// Handle `expenses categories`
pub fn handle_categories_command() {
    print!("{}", format_categories());
}
