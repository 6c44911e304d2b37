use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "chess-rules";

fn shell() -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.arg("--no-banner");
    cmd
}

#[test]
fn banner() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.write_stdin("quit\n")
            .assert()
            .success()
            .stdout(contains(env!("CARGO_PKG_VERSION")).and(contains("Release build"))),
    );
}

#[test]
fn plays_moves() {
    drop(
        shell()
            .write_stdin("e2e4\ne7e5\nmove g1 f3\ne8e6\nd\n")
            .assert()
            .success()
            .stdout(
                contains("ok e2e4\nok e7e5\nok g1f3\n")
                    .and(contains("rejected e8e6: the piece cannot move there"))
                    .and(contains("3 . . . . . N . ."))
                    .and(contains("turn: b")),
            ),
    );
}

#[test]
fn reports_checkmate() {
    drop(
        shell()
            .write_stdin("f2f3\ne7e5\ng2g4\nd8h4\ne1f2\nstatus\nquit\n")
            .assert()
            .success()
            .stdout(
                contains("ok d8h4\ncheckmate w\n")
                    .and(contains("rejected e1f2: the game is over"))
                    .and(contains("unknown command").not()),
            ),
    );
}

#[test]
fn unicode_board() {
    drop(
        shell()
            .arg("--unicode")
            .write_stdin("d\n")
            .assert()
            .success()
            .stdout(contains("1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖").and(contains("8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"))),
    );
}

#[test]
fn logs_go_to_stderr() {
    drop(
        shell()
            .env("RUST_LOG", "chess_rules=debug")
            .write_stdin("e2e4\nx\n")
            .assert()
            .success()
            .stdout(contains("ok e2e4\nunknown command: x\n"))
            .stderr(contains("move committed")),
    );
}

#[test]
fn game_over_is_logged() {
    drop(
        shell()
            .env("RUST_LOG", "chess_rules=info")
            .write_stdin("f2f3\ne7e5\ng2g4\nd8h4\n")
            .assert()
            .success()
            .stderr(contains("game over").and(contains("checkmate w"))),
    );
    drop(
        shell()
            .env("RUST_LOG", "chess_rules=warn")
            .write_stdin("f2f3\ne7e5\ng2g4\nd8h4\n")
            .assert()
            .success()
            .stderr(contains("game over").not()),
    );
}
