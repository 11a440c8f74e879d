//! Integration test: analyze text files, find gaps, render every output format.

use gapscope_core::{GapConfig, GapType, KeywordMap, KeywordStats, Priority};
use gapscope_render::{CsvWriter, JsonlWriter, ReportWriter};
use gapscope_score::{ContentStrategy, GapFinder};
use gapscope_text::KeywordAnalyzer;
use std::fs;
use std::process::Command;

fn create_pages() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    fs::write(
        root.join("competitor_a.txt"),
        "<h1>Keyword research guide</h1>\n\
         Keyword research drives content strategy. Keyword research tools \
         help with content strategy. Visit https://example.com for more.",
    )
    .unwrap();
    fs::write(
        root.join("competitor_b.txt"),
        "Content strategy matters. Keyword research and link building \
         improve rankings. Link building takes patience.",
    )
    .unwrap();
    fs::write(
        root.join("mine.txt"),
        "Our keyword research process. Keyword research for small sites.",
    )
    .unwrap();

    dir
}

fn scenario() -> (KeywordMap, KeywordMap) {
    let mut competitor = KeywordMap::new();
    competitor.insert(
        "seo optimization".to_string(),
        KeywordStats::new("seo optimization", 10, 5, 80.0),
    );
    competitor.insert(
        "digital marketing".to_string(),
        KeywordStats::new("digital marketing", 8, 4, 75.0),
    );
    competitor.insert(
        "content strategy".to_string(),
        KeywordStats::new("content strategy", 6, 3, 70.0),
    );

    let mut user = KeywordMap::new();
    user.insert(
        "seo optimization".to_string(),
        KeywordStats::new("seo optimization", 3, 1, 0.0),
    );
    user.insert(
        "digital marketing".to_string(),
        KeywordStats::new("digital marketing", 2, 1, 0.0),
    );

    (competitor, user)
}

#[test]
fn missing_keyword_scenario() {
    let (competitor, user) = scenario();
    let gaps = GapFinder::default().find_missing_keywords(&competitor, &user, 0.8);

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].keyword, "content strategy");
    assert_eq!(gaps[0].competitor_frequency, 6);
    assert_eq!(gaps[0].found_in_sites, 3);
    assert_eq!(gaps[0].opportunity_score, 45.0);
    assert_eq!(gaps[0].priority, Priority::Low);
}

#[test]
fn text_files_to_gaps() {
    let dir = create_pages();
    let analyzer = KeywordAnalyzer::default();

    let texts: Vec<String> = ["competitor_a.txt", "competitor_b.txt"]
        .iter()
        .map(|name| fs::read_to_string(dir.path().join(name)).unwrap())
        .collect();
    let competitor = analyzer.analyze_documents(&texts, 2);
    let user = analyzer.analyze_text(&fs::read_to_string(dir.path().join("mine.txt")).unwrap(), 1);

    assert!(competitor.contains_key("content strategy"));
    assert_eq!(competitor["content strategy"].sources.len(), 2);
    assert!(competitor.contains_key("keyword research"));
    assert!(user.contains_key("keyword research"));
    assert!(!competitor.keys().any(|k| k.contains("example")));

    let gaps = GapFinder::default().find_gaps(&competitor, &user);
    assert!(gaps.iter().any(|g| g.keyword == "content strategy"));
    assert!(!gaps.iter().any(|g| g.keyword == "keyword research"));
    assert!(gaps.windows(2).all(|w| w[0].opportunity_score >= w[1].opportunity_score));

    let mut seen = std::collections::HashSet::new();
    assert!(gaps.iter().all(|g| seen.insert(g.keyword.clone())));
}

#[test]
fn gaps_to_jsonl_roundtrip() {
    let (competitor, user) = scenario();
    let gaps = GapFinder::default()
        .keep_duplicates(true)
        .find_missing_keywords(&competitor, &user, 0.8);

    let output = JsonlWriter::new(0.8)
        .inputs(competitor.len(), user.len())
        .render(&gaps)
        .unwrap();

    let lines: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["CompetitorKeywords"], 3);
    assert_eq!(lines[0]["UserKeywords"], 2);
    assert_eq!(lines[1]["Keyword"], "content strategy");
    assert_eq!(lines[1]["GapType"], "exact");
    assert_eq!(lines[2]["GapType"], "semantic");
    assert_eq!(lines[3]["TotalOpportunities"], 2);
    assert_eq!(lines[3]["Low"], 2);
}

#[test]
fn report_and_csv_agree() {
    let (competitor, user) = scenario();
    let gaps = GapFinder::default().find_gaps(&competitor, &user);
    let strategy = ContentStrategy::build(&gaps, 20, &GapConfig::default());

    let report = ReportWriter::new(0.8)
        .user_keywords(user.len())
        .render(&competitor, &gaps, strategy.as_ref())
        .unwrap();
    let doc: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(doc["missing_keywords"][0]["keyword"], "content strategy");
    assert_eq!(doc["missing_keywords"][0]["gap_type"], "exact");
    assert_eq!(doc["strategy"]["total_opportunities"], 1);

    let csv = CsvWriter::render(&gaps).unwrap();
    let second = csv.lines().nth(1).unwrap();
    assert!(second.starts_with("content strategy,45.0,low,6,3,"));
    assert_eq!(gaps[0].gap_type, GapType::Exact);
}

// --- binary ---

fn gapscope() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_gapscope"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn binary_gaps_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let comp = dir.path().join("competitor.json");
    let user = dir.path().join("user.json");
    fs::write(
        &comp,
        r#"{
            "seo optimization": {"frequency": 10, "document_frequency": 5, "avg_importance": 80.0},
            "digital marketing": {"frequency": 8, "document_frequency": 4, "avg_importance": 75.0},
            "content strategy": {"frequency": 6, "document_frequency": 3, "avg_importance": 70.0}
        }"#,
    )
    .unwrap();
    fs::write(
        &user,
        r#"{"seo optimization": {"frequency": 3}, "digital marketing": {"frequency": 2}}"#,
    )
    .unwrap();

    let out = gapscope()
        .args(["--quiet", "gaps", "--format", "jsonl", "--competitor-stats"])
        .arg(&comp)
        .arg("--user-stats")
        .arg(&user)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1]["Keyword"], "content strategy");
    assert_eq!(lines[1]["Score"], 45.0);
}

#[test]
fn binary_analyze_writes_output_file() {
    let dir = create_pages();
    let out_path = dir.path().join("gaps.csv");

    let out = gapscope()
        .args(["-q", "analyze", "--format", "csv", "--competitor"])
        .arg(dir.path().join("competitor_a.txt"))
        .arg(dir.path().join("competitor_b.txt"))
        .arg("--user")
        .arg(dir.path().join("mine.txt"))
        .arg("--output")
        .arg(&out_path)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let csv = fs::read_to_string(&out_path).unwrap();
    assert!(csv.starts_with("Keyword,Opportunity_Score,Priority"));
    assert!(csv.contains("content strategy,"));
}

#[test]
fn binary_rejects_invalid_stats() {
    let dir = tempfile::tempdir().unwrap();
    let comp = dir.path().join("competitor.json");
    fs::write(&comp, r#"{"seo": {"frequency": 1, "avg_importance": -5.0}}"#).unwrap();

    let out = gapscope()
        .args(["gaps", "--competitor-stats"])
        .arg(&comp)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("avg_importance"));
}

#[test]
fn binary_keywords_report() {
    let dir = create_pages();
    let out = gapscope()
        .args(["keywords", "--top", "5"])
        .arg(dir.path().join("competitor_a.txt"))
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.starts_with("KEYWORD ANALYSIS REPORT"));
    assert!(stdout.contains("keyword research"));
}

#[test]
fn binary_rejects_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let comp = dir.path().join("competitor.json");
    fs::write(&comp, r#"{"seo tools": {"frequency": 4, "document_frequency": 2}}"#).unwrap();
    fs::write(dir.path().join("gapscope.toml"), "[weights]\nmax_score = -1\n").unwrap();

    let out = gapscope()
        .args(["gaps", "--competitor-stats"])
        .arg(&comp)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("max_score"), "{stderr}");
    assert!(!stderr.contains("panicked"), "{stderr}");
}
