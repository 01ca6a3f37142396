//! Play a short scripted session at every difficulty level.
//!
//! Run with: `cargo run --example demo`
//! Set `RUST_LOG=math_kingdom=debug` to see the engine's trace output.
//!
//! For each level the demo generates three seeded questions, prints the
//! client payload, answers the first option, and shows the feedback and the
//! running score.

use math_kingdom::{
    generate_rounding, grade_answer, to_client_grade, to_client_question, DifficultyLevel,
    RoundingRequest, SessionState,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    for level in DifficultyLevel::all() {
        let profile = level.profile();
        let targets: Vec<String> = profile.allowed_targets.iter().map(|t| t.to_string()).collect();
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!(
            "  {level}  numbers {}..={}  targets {{{}}}",
            profile.number_range_min,
            profile.number_range_max,
            targets.join(", ")
        );
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

        let mut session = SessionState::new(level);
        for seed in 0..3u64 {
            let question = generate_rounding(
                RoundingRequest::new(level).with_seed(seed * 100 + u64::from(level.get())),
            );
            let payload = to_client_question(&question);
            println!("  Q: {}", payload["prompt"].as_str().unwrap_or_default());
            for opt in payload["options"].as_array().into_iter().flatten() {
                println!("     [{}] {}", opt["index"], opt["text"].as_str().unwrap_or_default());
            }

            match grade_answer(&question, question.options[0]) {
                Ok(result) => {
                    let feedback = to_client_grade(&result);
                    let mark = if result.is_correct { "✓" } else { "✗" };
                    println!(
                        "  {mark} picked {}  ({})",
                        question.options[0],
                        feedback["explanation"].as_str().unwrap_or_default()
                    );
                    session.record(&result);
                }
                Err(err) => println!("  ! {err}"),
            }
            println!();
        }
        println!(
            "  Score {}  streak {}  best {}  accuracy {:.0}%",
            session.score,
            session.streak,
            session.best_streak,
            session.accuracy() * 100.0
        );
        println!();
    }
}
