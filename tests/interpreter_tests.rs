// End-to-end interpreter tests: statements, control flow, delimiters

use std::cell::RefCell;
use std::rc::Rc;

use hanullang::interpreter::engine::{run, Interpreter, RunResult};

fn run_body(body: &str, input: &str) -> RunResult {
    let source = format!("대체 누가\n{}\n디미고를 서류로 떨어짐?", body);
    run(&source, input)
}

#[test]
fn assignment_then_print() {
    let result = run_body(
        "디이미 호에엥 훌쩍 호에에엥\n서류제출 디이미 제발",
        "",
    );
    assert_eq!(result.output, "12\n", "cell 1 should hold 3 * 4");
    assert_eq!(result.log, "");
}

#[test]
fn assignment_without_expression_is_reported() {
    let result = run_body("디이미", "");
    assert_eq!(result.output, "");
    assert_eq!(result.log, "[에러] 대입도 에겐같이 하네;;\n");
}

#[test]
fn print_without_trailing_marker_emits_no_newline() {
    let result = run_body("서류제출 호엥\n서류제출 호에엥", "");
    assert_eq!(result.output, "23");
}

#[test]
fn input_statements_consume_lines_in_order() {
    let body = "\
키움아래 디미
키움아래 디이미
키움아래 디이이미
서류제출 디미 제발
서류제출 디이미 제발
서류제출 디이이미 제발";
    // Second line has no leading digits, third finds the queue exhausted.
    let result = run_body(body, "12\n\n  abc  \n");
    assert_eq!(result.output, "12\n0\n0\n");
    assert_eq!(result.log, "");
}

#[test]
fn input_keeps_the_leading_integer_prefix() {
    let body = "\
키움아래 디미
키움아래 디이미
키움아래 디이이미
서류제출 디미 제발
서류제출 디이미 제발
서류제출 디이이미 제발";
    let result = run_body(body, "12abc\n-7점\n+3행");
    assert_eq!(result.output, "12\n-7\n3\n");
    assert_eq!(result.log, "");
}

#[test]
fn input_with_a_bad_target_falls_back_to_cell_zero() {
    let result = run_body("키움아래 바보\n서류제출 디미", "7");
    assert_eq!(result.output, "7");
    assert_eq!(result.log, "[에러] 바보도 에겐같이 하네;;\n");
}

#[test]
fn move_copies_with_the_arrow_form() {
    let result = run_body(
        "디이미 호에에에에에엥\n디떨! 디이미 -> 디미\n서류제출 디미",
        "",
    );
    assert_eq!(result.output, "7");
    assert_eq!(result.log, "");
}

#[test]
fn move_copies_with_the_bare_two_token_form() {
    let result = run_body(
        "디미 하와와\n디떨! 디미 디이이미\n서류제출 디이이미",
        "",
    );
    assert_eq!(result.output, "-2");
    assert_eq!(result.log, "");
}

#[test]
fn move_with_the_wrong_arity_is_reported() {
    let result = run_body("디떨! 디미 디이미 디이이미\n서류제출 디이미", "");
    assert_eq!(result.output, "0", "the malformed copy must not write");
    assert_eq!(result.log, "[에러] MOVE도 에겐같이 하네;;\n");
}

#[test]
fn conditional_takes_the_matching_branch() {
    let body = "\
가을야구? 호엥 그러면 서류제출 호엥 아니면 서류제출 호에엥
가을야구? 호..엥 그러면 서류제출 호엥 아니면 서류제출 호에엥";
    let result = run_body(body, "");
    assert_eq!(result.output, "23");
    assert_eq!(result.log, "");
}

#[test]
fn false_conditional_without_else_falls_through() {
    let result = run_body("가을야구? 호..엥 그러면 서류제출 호엥", "");
    assert_eq!(result.output, "");
    assert_eq!(result.log, "");
}

#[test]
fn if_nesting_beyond_the_cap_is_reported() {
    // 65 nested then-branches: the innermost conditional is one level past
    // the cap, so its print never runs, but the next line still executes.
    let nested = format!("{}서류제출 호엥", "가을야구? 호엥 그러면 ".repeat(65));
    let result = run_body(&format!("{}\n서류제출 호에엥", nested), "");
    assert_eq!(result.output, "3");
    assert_eq!(result.log, "[에러] IF 중첩 한도 초과\n");
}

#[test]
fn conditional_without_then_separator_is_reported() {
    let result = run_body("가을야구? 호엥 서류제출 호엥", "");
    assert_eq!(result.output, "");
    assert_eq!(result.log, "[에러] IF 문법도 에겐같이 하네;;\n");
}

#[test]
fn end_inside_a_conditional_halts_the_whole_run() {
    let result = run_body("가을야구? 호엥 그러면 탈선린\n서류제출 호엥", "");
    assert_eq!(result.output, "", "lines after the halt must not run");
    assert_eq!(result.log, "[종료] 탈선린해도 디미는 못간다 한울한울아\n");
}

#[test]
fn jump_resumes_at_the_target_line() {
    // Line numbers count every line of the source, delimiters included:
    // the jump on line 2 lands on line 5.
    let body = "\
30실점 호에에에엥
서류제출 호엥
서류제출 호에엥
서류제출 호에에엥";
    let result = run_body(body, "");
    assert_eq!(result.output, "4");
    assert_eq!(result.log, "");
}

#[test]
fn jump_counts_blank_lines() {
    let body = "\
30실점 호에에에엥
서류제출 호엥

서류제출 하와";
    let result = run_body(body, "");
    assert_eq!(result.output, "-1");
    assert_eq!(result.log, "");
}

#[test]
fn jump_raised_inside_a_conditional_propagates() {
    let body = "\
가을야구? 호엥 그러면 30실점 호에에에엥
서류제출 호엥

서류제출 하와";
    let result = run_body(body, "");
    assert_eq!(result.output, "-1");
    assert_eq!(result.log, "");
}

#[test]
fn self_jump_trips_the_step_guard() {
    let result = run_body("30실점 호엥", "");
    assert_eq!(result.output, "");
    assert_eq!(
        result.log,
        "[에러] 1번째 줄에서 무한 루프가 감지되었습니다.\n"
    );
}

#[test]
fn step_guard_counts_every_executed_line() {
    // Line 2 increments cell 0, line 3 jumps back to line 2. The first step
    // executes the opening delimiter line, after which increments land on
    // even step numbers: 50000 of them fit under the ceiling.
    let source = "\
대체 누가
디미 디미 21대3 호.엥
30실점 호엥
디미고를 서류로 떨어짐?";
    let mut interpreter = Interpreter::new("");
    interpreter.compile(source);
    assert_eq!(interpreter.memory().read(0), Ok(50000));
    assert_eq!(
        interpreter.log(),
        "[에러] 1번째 줄에서 무한 루프가 감지되었습니다.\n"
    );
}

#[test]
fn missing_tail_delimiter_aborts_before_execution() {
    let result = run("대체 누가\n서류제출 호엥", "");
    assert_eq!(result.output, "");
    assert_eq!(result.log, "[에러] 이게 어떻게 에겐이냐 ㅋㅋ\n");
}

#[test]
fn missing_head_delimiter_aborts_before_execution() {
    let result = run("서류제출 호엥\n디미고를 서류로 떨어짐?", "");
    assert_eq!(result.output, "");
    assert_eq!(result.log, "[에러] 이게 어떻게 에겐이냐 ㅋㅋ\n");
}

#[test]
fn comments_are_stripped_before_classification() {
    let body = "\
서류제출 호엥 # 뒤는 무시
# 이 줄은 전부 주석
서류제출 호에엥";
    let result = run_body(body, "");
    assert_eq!(result.output, "23");
    assert_eq!(result.log, "");
}

#[test]
fn printchar_emits_the_scalar_value() {
    // 65 = 'A'
    let letter_a = format!("호{}엥", "에".repeat(63));
    let result = run_body(&format!("에겐 {} 제발", letter_a), "");
    assert_eq!(result.output, "A\n");
    assert_eq!(result.log, "");
}

#[test]
fn printchar_with_an_invalid_scalar_is_reported() {
    let result = run_body("에겐 하와", "");
    assert_eq!(result.output, "", "no replacement character, no newline");
    assert_eq!(result.log, "[에러] 잘못된 문자 코드: -1\n");
}

#[test]
fn observer_sees_the_cumulative_log_on_every_append() {
    let snapshots: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&snapshots);
    let mut interpreter =
        Interpreter::with_observer("", Box::new(move |text| sink.borrow_mut().push(text.to_string())));
    interpreter.compile("대체 누가\n서류제출 무야호\n에겐 하와\n디미고를 서류로 떨어짐?");

    let snapshots = snapshots.borrow();
    assert_eq!(snapshots.len(), 2);
    assert_eq!(snapshots[0], "[에러] 무야호도 에겐같이 하네;;\n");
    assert_eq!(
        snapshots[1],
        "[에러] 무야호도 에겐같이 하네;;\n[에러] 잘못된 문자 코드: -1\n"
    );
}

#[test]
fn unclassified_lines_are_ignored() {
    let result = run_body("그냥 아무 말\n서류제출 호엥", "");
    assert_eq!(result.output, "2");
    assert_eq!(result.log, "");
}
