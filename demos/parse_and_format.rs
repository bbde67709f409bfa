//! Parse a program written in lowercase with aliases and print it in
//! canonical form.

fn main() {
    let input = "down. color #a0a0a0.\nrep 3 \"forw 10. left 120.\" up. back 4.";

    let program = turtle_lang::parse_str(input).expect("parse failed");

    println!("Statements: {}", program.statements().count());
    for statement in program.statements() {
        println!("  {statement:?}");
    }

    let output = turtle_lang::format(&program);
    println!("\nFormatted output:\n{output}");
}
