use assert_cmd::Command;
use serde_json::Value;

fn quorum() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("quorum-cli").unwrap();
    cmd.env_remove("QUORUM_USER");
    cmd.env_remove("QUORUM_INSIGHT_DELAY_MS");
    cmd
}

#[test]
fn list_shows_seeded_decisions() {
    quorum()
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Should I start a tech startup or join a big company?",
        ))
        .stdout(predicates::str::contains(
            "Should we adopt a hybrid work model or go fully remote?",
        ))
        .stdout(predicates::str::contains(
            "Should I invest in cryptocurrency or traditional stocks?",
        ));
}

#[test]
fn list_json_outputs_the_seeded_board() {
    let output = quorum().args(["list", "--json"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: Value = serde_json::from_str(&stdout).unwrap();

    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["id"], "1");
    assert_eq!(arr[0]["category"], "career");
    assert_eq!(arr[0]["status"], "active");
    assert_eq!(arr[1]["id"], "2");
    assert_eq!(arr[2]["id"], "3");
}

#[test]
fn list_filter_mine_scopes_to_the_acting_user() {
    let output = quorum()
        .args(["list", "--filter", "mine", "--user", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("hybrid work model"));
    assert!(!stdout.contains("tech startup"));
}

#[test]
fn list_rejects_unknown_filter() {
    quorum()
        .args(["list", "--filter", "junk"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unknown filter"));
}

#[test]
fn tally_reports_reference_counts() {
    quorum()
        .args(["tally", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("3 votes on decision 1"))
        .stdout(predicates::str::contains("33%"));
}

#[test]
fn tally_json_splits_by_option() {
    let output = quorum().args(["tally", "1", "--json"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["tally"]["yes"], 1);
    assert_eq!(parsed["tally"]["no"], 1);
    assert_eq!(parsed["tally"]["maybe"], 1);
}

#[test]
fn vote_updates_the_tally() {
    quorum()
        .args(["vote", "3", "--option", "yes", "--user", "4"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Recorded yes vote on decision 3"))
        .stdout(predicates::str::contains("Tally: 1 yes / 1 no / 1 maybe"));
}

#[test]
fn revote_replaces_the_previous_ballot() {
    // User 2 already voted yes on decision 1 in the seed data.
    quorum()
        .args(["vote", "1", "--option", "no", "--user", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Tally: 0 yes / 2 no / 1 maybe"));
}

#[test]
fn vote_json_includes_vote_and_tally() {
    let output = quorum()
        .args(["vote", "2", "--option", "maybe", "--user", "3", "--json"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["vote"]["option"], "maybe");
    assert_eq!(parsed["vote"]["user_id"], "3");
    assert_eq!(parsed["tally"]["yes"], 1);
    assert_eq!(parsed["tally"]["no"], 1);
    assert_eq!(parsed["tally"]["maybe"], 1);
}

#[test]
fn invalid_vote_option_fails() {
    quorum()
        .args(["vote", "1", "--option", "perhaps"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid vote option"));
}

#[test]
fn out_of_range_confidence_fails() {
    quorum()
        .args(["vote", "1", "--option", "yes", "--confidence", "11"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("confidence must be between 1 and 10"));
}

#[test]
fn vote_on_missing_decision_fails() {
    quorum()
        .args(["vote", "999", "--option", "yes"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("decision not found: 999"));
}

#[test]
fn create_prints_category_templates() {
    quorum()
        .args([
            "create",
            "-t", "Leave consulting for a product role?",
            "-d", "Steady client base versus a product bet",
            "--category", "career",
            "--insight-delay-ms", "0",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Created decision"))
        .stdout(predicates::str::contains(
            "Potential for professional growth and skill development",
        ));
}

#[test]
fn create_json_normalizes_the_draft() {
    let output = quorum()
        .args([
            "create",
            "-t", "  Leave consulting for a product role?  ",
            "-d", "Steady client base versus a product bet",
            "--category", "career",
            "--tags", "career, startup ,career",
            "--insight-delay-ms", "0",
            "--json",
        ])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["title"], "Leave consulting for a product role?");
    assert_eq!(parsed["category"], "career");
    assert_eq!(parsed["status"], "active");
    assert_eq!(parsed["tags"], serde_json::json!(["career", "startup"]));
    assert_eq!(parsed["insight"]["confidence"], 0.8);
    assert_eq!(parsed["insight"]["sentiment"], "neutral");
    assert_eq!(parsed["insight"]["decision_id"], parsed["id"]);
}

#[test]
fn create_requires_nonempty_title() {
    quorum()
        .args([
            "create",
            "-t", "   ",
            "-d", "some description",
            "--insight-delay-ms", "0",
        ])
        .assert()
        .failure()
        .stderr(predicates::str::contains("title must not be empty"));
}

#[test]
fn create_rejects_malformed_deadline() {
    quorum()
        .args([
            "create",
            "-t", "Plan the offsite",
            "-d", "Pick a week",
            "--deadline", "next month",
            "--insight-delay-ms", "0",
        ])
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid deadline"));
}

#[test]
fn unknown_category_falls_back_to_personal() {
    let output = quorum()
        .args([
            "create",
            "-t", "Take up sailing?",
            "-d", "Weekends are free now",
            "--category", "underwater basket weaving",
            "--insight-delay-ms", "0",
            "--json",
        ])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["category"], "personal");
}

#[test]
fn show_renders_votes_and_discussions() {
    quorum()
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("hybrid work model"))
        .stdout(predicates::str::contains("Sarah Chen"))
        .stdout(predicates::str::contains("spontaneous collaboration"))
        .stdout(predicates::str::contains("AI insight"));
}

#[test]
fn show_json_includes_children() {
    let output = quorum().args(["show", "1", "--json"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["id"], "1");
    assert_eq!(parsed["votes"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["discussions"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["discussions"][0]["type"], "pro");
    assert_eq!(parsed["insight"]["confidence"], 0.75);
}

#[test]
fn show_missing_decision_fails() {
    quorum()
        .args(["show", "999"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("decision not found: 999"));
}

#[test]
fn discuss_starts_a_thread() {
    quorum()
        .args([
            "discuss", "3",
            "--content", "Index funds all the way",
            "--kind", "con",
            "--user", "5",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Started con discussion"));
}

#[test]
fn discuss_rejects_unknown_kind() {
    quorum()
        .args(["discuss", "3", "--content", "hmm", "--kind", "rant"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("invalid discussion kind"));
}

#[test]
fn reply_joins_a_seeded_thread() {
    quorum()
        .args([
            "reply", "1", "2",
            "--content", "Agreed on the stability point",
            "--user", "4",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added reply"));
}

#[test]
fn like_continues_the_seeded_count() {
    quorum()
        .args(["like", "1", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("13 likes"));
}

#[test]
fn like_on_missing_reply_fails() {
    quorum()
        .args(["like", "1", "1", "999"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("reply not found: 999"));
}

#[test]
fn stats_reports_board_counters() {
    let output = quorum()
        .args(["stats", "--user", "1", "--json"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["decisions"], 3);
    assert_eq!(parsed["active"], 3);
    assert_eq!(parsed["mine"], 1);
    assert_eq!(parsed["votes"], 7);
    assert_eq!(parsed["discussions"], 4);
}

#[test]
fn insight_preview_is_deterministic() {
    let args = [
        "insight",
        "--category", "finance",
        "--insight-delay-ms", "0",
    ];
    let first = quorum().args(args).output().unwrap();
    let second = quorum().args(args).output().unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let stdout = String::from_utf8(first.stdout).unwrap();
    assert!(stdout.contains("Consult with a financial advisor"));
}

#[test]
fn insight_json_names_the_category() {
    let output = quorum()
        .args([
            "insight",
            "--category", "technology",
            "--insight-delay-ms", "0",
            "--json",
        ])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let parsed: Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(parsed["category"], "technology");
    assert_eq!(parsed["insight"]["confidence"], 0.8);
    assert_eq!(parsed["insight"]["pros"].as_array().unwrap().len(), 4);
}
