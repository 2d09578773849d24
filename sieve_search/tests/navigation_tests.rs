mod helpers;

use sieve_core::{EquationAndTokenIndex, Label, Nature, ValueType};
use sieve_search::{Key, SearchConfig};

use helpers::{build_status_running, create_controller, meta};

fn at(equation_index: usize, token_index: usize) -> Option<EquationAndTokenIndex> {
    Some(EquationAndTokenIndex::new(equation_index, token_index))
}

#[tokio::test(start_paused = true)]
async fn test_arrow_left_walks_back_through_tokens() {
    let (mut controller, _applied) = create_controller(SearchConfig::default());
    build_status_running(&mut controller);
    controller.create_token("needle", meta(Nature::Custom, ValueType::Custom));

    assert!(controller.handle_key(Key::ArrowLeft));
    assert_eq!(controller.focus(), at(1, 0));
    assert_eq!(controller.input(), "needle");
    assert_eq!(controller.caret(), 6);

    // Caret inside the text: the field moves the caret itself.
    assert!(!controller.handle_key(Key::ArrowLeft));

    for (expected, text) in [(at(0, 2), "Running"), (at(0, 1), "="), (at(0, 0), "Status")] {
        controller.set_caret(0);
        assert!(controller.handle_key(Key::ArrowLeft));
        assert_eq!(controller.focus(), expected);
        assert_eq!(controller.input(), text);
    }

    // Already at the very first token.
    controller.set_caret(0);
    assert!(controller.handle_key(Key::ArrowLeft));
    assert_eq!(controller.focus(), at(0, 0));
}

#[tokio::test(start_paused = true)]
async fn test_arrow_right_walks_forward_and_exits() {
    let (mut controller, _applied) = create_controller(SearchConfig::default());
    build_status_running(&mut controller);
    controller.create_token("needle", meta(Nature::Custom, ValueType::Custom));
    controller.set_focus(at(0, 0));

    // Caret at the start of "Status".
    controller.set_caret(0);
    assert!(!controller.handle_key(Key::ArrowRight));

    for expected in [at(0, 1), at(0, 2), at(1, 0)] {
        controller.set_caret(controller.input().len());
        assert!(controller.handle_key(Key::ArrowRight));
        assert_eq!(controller.focus(), expected);
        assert_eq!(controller.caret(), 0);
    }

    controller.set_caret(controller.input().len());
    assert!(controller.handle_key(Key::ArrowRight));
    assert_eq!(controller.focus(), None);
    assert_eq!(controller.input(), "");

    // Nothing to the right of the append position.
    assert!(!controller.handle_key(Key::ArrowRight));
}

#[tokio::test(start_paused = true)]
async fn test_arrow_left_without_equations() {
    let (mut controller, _applied) = create_controller(SearchConfig::default());
    assert!(controller.handle_key(Key::ArrowLeft));
    assert_eq!(controller.focus(), None);
}

#[tokio::test(start_paused = true)]
async fn test_escape_leaves_edit_mode_without_commit() {
    let (mut controller, _applied) = create_controller(SearchConfig::default());
    build_status_running(&mut controller);
    controller.set_focus(at(0, 2));
    controller.set_input("Done");

    assert!(controller.handle_key(Key::Escape));
    assert_eq!(controller.focus(), None);
    assert_eq!(controller.input(), "");
    assert_eq!(controller.equations()[0].items[2].label, Label::from("Running"));
}

#[tokio::test(start_paused = true)]
async fn test_edit_focused_token_in_place() {
    let (mut controller, _applied) = create_controller(SearchConfig::default());
    build_status_running(&mut controller);

    assert!(controller.set_focus(at(0, 2)));
    controller.load_suggestions().await.unwrap();
    controller.set_input("Done");
    assert!(controller.handle_key(Key::Enter));

    assert_eq!(controller.equations().len(), 1);
    assert_eq!(controller.equations()[0].items[2].label, Label::from("Done"));
    assert_eq!(controller.equations()[0].items[2].nature, Nature::Value);
    assert_eq!(controller.focus(), None);
}

#[tokio::test(start_paused = true)]
async fn test_set_focus_out_of_range() {
    let (mut controller, _applied) = create_controller(SearchConfig::default());
    build_status_running(&mut controller);
    assert!(!controller.set_focus(at(0, 3)));
    assert_eq!(controller.focus(), None);
}

#[tokio::test(start_paused = true)]
async fn test_tab_autocompletes_prefix() {
    let (mut controller, _applied) = create_controller(SearchConfig::default());
    controller.load_suggestions().await.unwrap();

    controller.set_input("sub");
    assert!(controller.handle_key(Key::Tab));
    assert_eq!(controller.input(), "SubmissionTime");
    assert_eq!(controller.caret(), "SubmissionTime".len());

    controller.set_input("zzz");
    assert!(!controller.handle_key(Key::Tab));
    assert_eq!(controller.input(), "zzz");
}
