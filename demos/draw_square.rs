//! Draw a red square and print its segments.

use turtle_lang::{Turtle, run};

fn main() {
    let input = "\
% a red square
COLOR #ff0000. DOWN.
REPEAT 4 \"FORWARD 10. LEFT 90.\"
";

    let mut turtle = Turtle::new();
    run(input, &mut turtle).expect("parse failed");

    for segment in turtle.segments() {
        println!("{segment:.2}");
    }
    let end = turtle.position();
    println!("\nEnded at ({:.2}, {:.2}), heading {}", end.x, end.y, turtle.heading());
}
