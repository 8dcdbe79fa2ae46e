//! Ranking behavior: tier hierarchy, tie-breaks, and the short-query guard.

mod common;

use common::{sample_tools, tool};
use toolrank::{best_match, rank, score_match, suggestions, MatchTier};

#[test]
fn empty_query_returns_everything_in_input_order() {
    let tools = sample_tools();
    let ranked = rank(&tools, "");
    assert_eq!(ranked.len(), tools.len());
    for (got, want) in ranked.iter().zip(&tools) {
        assert_eq!(got.name, want.name);
    }
}

#[test]
fn whitespace_query_is_the_empty_query() {
    let tools = sample_tools();
    assert_eq!(rank(&tools, " \t ").len(), tools.len());
}

#[test]
fn prefix_beats_substring() {
    let tools = vec![
        tool("Marena", "", "", ""),
        tool("Arena", "", "", ""),
    ];
    let ranked = rank(&tools, "aren");
    let names: Vec<&str> = ranked.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Arena", "Marena"]);
}

#[test]
fn field_hierarchy_name_handle_category_description() {
    let tools = vec![
        tool("Notes App", "keeper", "Productivity", "A quasar powered notebook"),
        tool("Quasar", "quasar", "Frameworks", "Build once, deploy everywhere"),
    ];
    let ranked = rank(&tools, "quasar");
    assert_eq!(ranked[0].name, "Quasar");
    assert_eq!(ranked[1].name, "Notes App");
}

#[test]
fn single_letter_query_hits_name_prefixes_only() {
    let tools = sample_tools();
    let ranked = rank(&tools, "j");
    let names: Vec<&str> = ranked.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Jan"]);
}

#[test]
fn single_letter_query_cannot_match_via_description() {
    // "q" appears only inside descriptions ("quality", "quasar", ...):
    // the short-query guard must block those records entirely.
    let tools = vec![tool("Whisper", "whisper", "Speech", "High quality output")];
    assert!(rank(&tools, "q").is_empty());
    // A record whose name starts with "q" still matches at one character.
    let tools = vec![tool("Qwen", "qwen", "Models", "")];
    assert_eq!(rank(&tools, "q").len(), 1);
}

#[test]
fn multi_token_queries_are_an_and_over_tokens() {
    let tools = sample_tools();
    let ranked = rank(&tools, "open chat");
    let names: Vec<&str> = ranked.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Open WebUI"]);

    assert!(rank(&tools, "open zzz").is_empty());
}

#[test]
fn stability_within_a_tier_preserves_input_order() {
    let tools = vec![
        tool("Chatterbox", "", "Audio", ""),
        tool("Chatbot Arena", "", "Benchmarks", ""),
        tool("Chattermill", "", "Analytics", ""),
    ];
    // All three are NamePrefix matches for "chat".
    let ranked = rank(&tools, "chat");
    let names: Vec<&str> = ranked.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Chatterbox", "Chatbot Arena", "Chattermill"]);
}

#[test]
fn later_better_tier_overtakes_earlier_worse_tier() {
    let tools = vec![
        tool("Workbench", "bench", "Dev Tools", ""),
        tool("Benchmate", "benchmate", "Dev Tools", ""),
    ];
    // "Workbench" only matches "bench" via its handle prefix;
    // "Benchmate" is a name prefix and must come first despite its position.
    let ranked = rank(&tools, "bench");
    let names: Vec<&str> = ranked.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Benchmate", "Workbench"]);
}

#[test]
fn case_and_punctuation_insensitive_ordering() {
    let tools = sample_tools();
    let lower: Vec<&str> = rank(&tools, "arena").iter().map(|t| t.name.as_str()).collect();
    let upper: Vec<&str> = rank(&tools, "ARENA").iter().map(|t| t.name.as_str()).collect();
    let dashed: Vec<&str> = rank(&tools, "-arena-").iter().map(|t| t.name.as_str()).collect();
    assert_eq!(lower, upper);
    assert_eq!(lower, dashed);
    assert_eq!(lower, vec!["LM Arena"]);
}

#[test]
fn diacritics_are_stripped_before_matching() {
    let tools = vec![tool("Café Transcriber", "cafetranscribe", "Speech", "")];
    assert_eq!(rank(&tools, "cafe").len(), 1);
    assert_eq!(rank(&tools, "café").len(), 1);
}

#[test]
fn best_match_resolves_a_query_to_one_tool() {
    let tools = sample_tools();
    assert_eq!(best_match(&tools, "oll").unwrap().name, "Ollama");
    assert!(best_match(&tools, "nonexistent").is_none());
}

#[test]
fn suggestions_cap_the_result_list() {
    let tools: Vec<_> = (0..20)
        .map(|i| tool(&format!("Agent {}", i), "", "Agents", ""))
        .collect();
    assert_eq!(suggestions(&tools, "agent", 8).len(), 8);
}

#[test]
fn score_match_exposes_the_tier_for_callers() {
    let t = tool("Open WebUI", "openwebui", "Chat", "Self-hosted chat frontend");
    assert_eq!(score_match(&t, "open"), Some(MatchTier::NamePrefix));
    assert_eq!(score_match(&t, "webui"), Some(MatchTier::NameWordPrefix));
    assert_eq!(score_match(&t, "cha"), Some(MatchTier::CategoryPrefix));
    assert_eq!(score_match(&t, "chat open"), Some(MatchTier::TokenPrefixes));
    assert_eq!(score_match(&t, "enwe"), Some(MatchTier::NameSubstring));
    // Description words never feed the token tier; they only count for the
    // last substring fallback.
    assert_eq!(score_match(&t, "hosted"), Some(MatchTier::DescriptionSubstring));
}
