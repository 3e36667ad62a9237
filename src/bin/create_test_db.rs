use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use trivia_rs::{CategoryName, NewQuestion, create_category, initialize_db, insert_question};

/// A utility for creating a test database for the REST API server of trivia_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Questions as (question, answer, difficulty), grouped by category name.
const SAMPLE_QUESTIONS: [(&str, &[(&str, &str, i64)]); 6] = [
    (
        "Science",
        &[
            ("What is the heaviest organ in the human body?", "The Liver", 4),
            ("Who discovered penicillin?", "Alexander Fleming", 3),
            ("Hematology is a branch of medicine involving the study of what?", "Blood", 4),
        ],
    ),
    (
        "Art",
        &[
            (
                "Which Dutch graphic artist, initials M C, was a creator of optical illusions?",
                "Escher",
                1,
            ),
            ("La Giaconda is better known as what?", "Mona Lisa", 3),
            ("How many paintings did Van Gogh sell in his lifetime?", "One", 4),
        ],
    ),
    (
        "Geography",
        &[
            ("What is the largest lake in Africa?", "Lake Victoria", 2),
            (
                "In which royal palace would you find the Hall of Mirrors?",
                "The Palace of Versailles",
                3,
            ),
            ("The Taj Mahal is located in which Indian city?", "Agra", 2),
        ],
    ),
    (
        "History",
        &[
            (
                "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
                "Maya Angelou",
                2,
            ),
            ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4),
            ("In which year did the Berlin Wall fall?", "1989", 2),
        ],
    ),
    (
        "Entertainment",
        &[
            (
                "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
                "Apollo 13",
                4,
            ),
            (
                "Which actor did Anne Rice first denounce, then praise, as her vampire Lestat?",
                "Tom Cruise",
                4,
            ),
        ],
    ),
    (
        "Sports",
        &[
            ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3),
            ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4),
        ],
    ),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'trivia.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    for (category_name, questions) in SAMPLE_QUESTIONS {
        println!("Creating category {category_name:?} with {} questions...", questions.len());

        let category = create_category(CategoryName::new(category_name)?, &conn)?;

        for &(question, answer, difficulty) in questions {
            let new_question = NewQuestion::new(question, answer, category.id, difficulty)?;
            insert_question(&new_question, &conn)?;
        }
    }

    println!("Success!");

    Ok(())
}
