use std::io::{self, BufRead, Write};

use valentine_search::{
    default_words, Placement, PuzzleSession, SessionObserver, WordSearchConfig, DEFAULT_COLUMNS,
    DEFAULT_ROWS,
};

struct StatusPrinter;

impl SessionObserver for StatusPrinter {
    fn word_found(&mut self, word: &str, _placement: Placement) {
        println!("You found {word}!");
    }

    fn status_changed(&mut self, found: usize, remaining: usize) {
        println!("Words found: {found}  Words left: {remaining}");
    }

    fn completed(&mut self) {
        println!("VALENTINES APPROVED PASSED TEST");
    }
}

fn prompt(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn print_grid(session: &PuzzleSession) {
    let highlighted = session.highlighted_cells();
    let word_search = session.word_search();

    print!("   ");
    for column in 0..word_search.num_columns() {
        print!("{column:>3}");
    }
    println!();

    for row in 0..word_search.num_rows() {
        print!("{row:>3}");
        for column in 0..word_search.num_columns() {
            let ch = word_search[(row, column)];
            if highlighted.contains(&(row, column)) {
                print!("  {}", ch.to_ascii_lowercase());
            } else {
                print!("  {ch}");
            }
        }
        println!();
    }
}

fn parse_drag(line: &str) -> Option<((usize, usize), (usize, usize))> {
    let numbers: Vec<usize> = line
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match numbers[..] {
        [r1, c1, r2, c2] => Some(((r1, c1), (r2, c2))),
        _ => None,
    }
}

fn show_final_message() {
    println!();
    println!("        Happy Valentine's Day!");
    println!("         I love you so much!");
    println!();
    println!("    <3    <3    <3    <3    <3");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        match prompt(&mut input, "Will you be my Valentine? [yes/no] ")?.as_deref() {
            None => return Ok(()),
            Some(answer) if answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y") => {
                break
            }
            Some(_) => println!("Oh no! Please don't say no! You know you love me :)"),
        }
    }

    let words = default_words();
    let mut session = PuzzleSession::new(&WordSearchConfig {
        num_rows: DEFAULT_ROWS,
        num_columns: DEFAULT_COLUMNS,
        words: &words,
    })?;
    session.add_observer(Box::new(StatusPrinter));

    println!();
    println!("Find the Hidden Words!");
    println!("Select a word with `row col row col`, ask for a `hint`, or `quit`.");

    while !session.is_completed() {
        println!();
        print_grid(&session);
        println!("{}  {}", session.found_label(), session.remaining_label());

        let Some(line) = prompt(&mut input, "> ")? else {
            return Ok(());
        };

        match line.as_str() {
            "quit" => return Ok(()),
            "hint" => println!("{}", session.hint()),
            _ => match parse_drag(&line) {
                Some((start, end)) => {
                    session.on_drag_start(start);
                    if session.on_drag_end(end).word.is_none() {
                        println!("No word there, keep looking.");
                    }
                }
                None => println!("Could not read {line:?}; expected four numbers."),
            },
        }
    }

    show_final_message();

    Ok(())
}
