//! Demonstrate syntax error reporting for invalid programs.

fn main() {
    let programs = [
        // Missing period after the number
        "DOWN.\nFORWARD 10\n",
        // A word where a number belongs
        "LEFT ten.",
        // Loop body never closed
        "REPEAT 4 \"FORWARD 10. LEFT 90.\n",
        // Stray closing quote
        "UP.\n\"",
    ];

    for input in programs {
        match turtle_lang::parse_str(input) {
            Ok(_) => println!("Parsed OK (unexpected)"),
            Err(e) => {
                println!("{e}");
                println!("  Kind: {:?}", e.kind);
                println!("  Found: {}", e.found);
            }
        }
        println!();
    }
}
