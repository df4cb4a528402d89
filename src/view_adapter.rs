use serde_json::{json, Value};
use crate::quiz_engine::{
    models::{OptionLetter, QuizResult, SessionQuestion},
    runner::{QuizRunner, Screen},
    session::QuizSession,
};

/// Visual role of an option slot, used by the renderer to pick colors.
fn option_role(index: usize, question: &SessionQuestion, selected: Option<usize>) -> &'static str {
    match selected {
        None => "idle",
        Some(_) if question.is_correct(index) => "correct",
        Some(s) if s == index => "wrong",
        Some(_) => "dimmed",
    }
}

/// Build the option boxes in shuffled order.
fn options(question: &SessionQuestion, selected: Option<usize>) -> Value {
    let boxes: Vec<Value> = question
        .shuffled_options()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let letter = OptionLetter::from_index(i).map(|l| l.to_string()).unwrap_or_default();
            json!({
                "index": i,
                "letter": letter,
                "text": opt.text,
                "selected": selected == Some(i),
                "role": option_role(i, question, selected)
            })
        })
        .collect();
    Value::Array(boxes)
}

/// Label of the advance button; only shown once the question is answered.
fn next_button(session: &QuizSession) -> Value {
    if session.last_selection().is_none() {
        return Value::Null;
    }
    let label = if session.is_last_question() { "See results" } else { "Next" };
    json!({ "label": label })
}

fn quiz_view(session: &QuizSession) -> Value {
    let Ok(question) = session.current_question() else {
        return json!({ "screen": "Error", "message": "no active question" });
    };
    let selected = session.last_selection();
    let (number, total) = session.progress();

    json!({
        "screen": "Quiz",
        "question": {
            "number": number,
            "total": total,
            "prompt": question.prompt(),
            "options": options(question, selected)
        },
        "progress": session.progress_fraction(),
        "correct_count": session.correct_count(),
        "answered": selected.is_some(),
        "last_answer_correct": session.last_answer_correct(),
        "correct_letter": selected.map(|_| question.correct_letter().to_string()),
        "next_button": next_button(session)
    })
}

fn result_view(result: &QuizResult) -> Value {
    json!({
        "screen": "Result",
        "correct_count": result.correct_count,
        "total": result.total,
        "percentage": result.percentage,
        "tier": result.tier,
        "headline": result.tier.headline()
    })
}

/// Map the runner's current screen to a JSON snapshot for a renderer.
///
/// The snapshot is read-only: rendering it never changes quiz state.
pub fn to_view_state(runner: &QuizRunner) -> Value {
    match runner.screen() {
        Screen::Start => json!({
            "screen": "Start",
            "num_questions": runner.num_questions(),
            "bank_size": runner.bank().map(|b| b.len()).unwrap_or(0)
        }),
        Screen::Quiz => quiz_view(runner.session()),
        Screen::Result => match runner.result() {
            Ok(result) => result_view(&result),
            Err(e) => json!({ "screen": "Error", "message": e.to_string() }),
        },
        Screen::Error => json!({
            "screen": "Error",
            "message": runner.error_message().unwrap_or("unknown error")
        }),
    }
}
