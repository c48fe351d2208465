// Unit tests for the label engine's public contract.
//
// Covers the documented scenarios (short input, repeated English term,
// repeated CJK trigram, clamped label count, case-variant duplicates) and
// property tests for the invariants that hold for every input.

use std::collections::HashSet;

use proptest::prelude::*;

use feedlabel::label::engine::effective_max_labels;
use feedlabel::label::language::Script;
use feedlabel::label::preprocess::clean;
use feedlabel::label::{
    generate_labels, Labeler, MAX_LABELS, MAX_LABEL_LENGTH, MIN_CONTENT_LENGTH, MIN_LABEL_LENGTH,
};

const BLOCKCHAIN_POST: &str = "Blockchain adoption keeps growing across supply chains. \
    Retailers track shipments with blockchain ledgers, while insurers settle claims \
    through smart contracts. Critics question whether blockchain scales, yet \
    developers ship faster consensus protocols. Regulators now study blockchain \
    custody rules, and auditors verify blockchain transactions.";

const CJK_POST: &str = "区块链正在改变金融行业。许多银行开始研究区块链的应用场景，\
    希望提高结算效率。专家认为，区块链可以降低跨境支付成本，但监管政策仍需完善。";

// ============================================================
// Documented scenarios
// ============================================================

#[test]
fn short_note_is_too_short() {
    let result = generate_labels("Short note.", 5);
    assert!(result.is_too_short);
    assert!(result.labels.is_empty());
}

#[test]
fn empty_and_markup_only_input_is_too_short() {
    assert!(generate_labels("", 5).is_too_short);
    assert!(generate_labels("<p>   </p><br/><img src=\"x.png\">", 5).is_too_short);
}

#[test]
fn exactly_min_length_passes_gate() {
    let text = "kernel ".repeat(7);
    let cleaned = clean(&text);
    assert!(cleaned.chars().count() < MIN_CONTENT_LENGTH);
    assert!(generate_labels(&text, 5).is_too_short);

    let text = format!("{}{}", "k".repeat(MIN_CONTENT_LENGTH - 6), " rust!");
    assert_eq!(clean(&text).chars().count(), MIN_CONTENT_LENGTH);
    assert!(!generate_labels(&text, 5).is_too_short);
}

#[test]
fn repeated_english_term_ranks_first() {
    let result = generate_labels(BLOCKCHAIN_POST, 5);
    assert!(!result.is_too_short);
    assert!(result.labels.len() <= 5);
    assert_eq!(result.labels[0], "blockchain");
}

#[test]
fn repeated_cjk_trigram_ranks_before_bigrams() {
    let result = generate_labels(CJK_POST, 5);
    assert!(!result.is_too_short);
    assert_eq!(result.labels[0], "区块链");
    assert_eq!(result.labels.len(), 5);
    // Plenty of trigrams here, so no bigram makes the cut
    assert!(result.labels.iter().all(|l| l.chars().count() == 3));
}

#[test]
fn single_trigram_beats_frequent_bigram() {
    let text = "中文，世界，中文，你好，朋友，中文，天气，城市，中文，音乐，电影，\
        学校，老师，医生，火车，飞机，区块链，咖啡，面包，花园，森林。";
    let result = generate_labels(text, 5);
    assert_eq!(result.labels, vec!["区块链", "中文", "世界", "你好", "朋友"]);
}

#[test]
fn katakana_middle_dot_never_appears_in_labels() {
    let text = "コンピュータ・サイエンスの授業。コンピュータ・サイエンスは面白い。\
        コンピュータ・サイエンスを学ぶ学生が増えている。";
    let result = generate_labels(text, 5);
    assert_eq!(
        result.labels,
        vec!["コンピ", "ンピュ", "ピュー", "ュータ", "サイエ"]
    );
    assert!(result.labels.iter().all(|l| !l.contains('・')));
}

#[test]
fn overlong_word_does_not_take_a_label_slot() {
    let compound = "x".repeat(MAX_LABEL_LENGTH + 13);
    let text = format!(
        "{compound} kernel scheduler {compound} compiler linker allocator \
         {compound} debugger profiler kernel scheduler compiler linker \
         allocator debugger profiler"
    );
    let result = generate_labels(&text, 5);
    assert_eq!(
        result.labels,
        vec!["kernel", "scheduler", "compiler", "linker", "allocator"]
    );
}

#[test]
fn zero_max_labels_is_clamped_not_empty() {
    let result = generate_labels(BLOCKCHAIN_POST, 0);
    assert!(!result.is_too_short);
    assert_eq!(result.labels.len(), MAX_LABELS);
    assert_eq!(result, generate_labels(BLOCKCHAIN_POST, 5));
}

#[test]
fn out_of_range_max_labels_behaves_like_five() {
    let five = generate_labels(BLOCKCHAIN_POST, 5);
    for requested in [-100, -1, 0, 6, 50, i64::MAX, i64::MIN] {
        assert_eq!(generate_labels(BLOCKCHAIN_POST, requested), five);
    }
}

#[test]
fn case_variants_collapse_to_one_label() {
    let text = "Kernel maintainers reviewed the kernel patch. The KERNEL team \
        merged it after the Kernel summit discussion about scheduler latency.";
    let result = generate_labels(text, 5);
    let kernel_count = result.labels.iter().filter(|l| *l == "kernel").count();
    assert_eq!(kernel_count, 1);
    assert!(result.labels.iter().all(|l| l.chars().all(|c| !c.is_uppercase())));
}

#[test]
fn html_article_is_labeled_on_text_only() {
    let html = "<html><head><style>body { font-family: serif; }</style>\
        <script>window.analytics = true;</script></head><body>\
        <h1>Compiler release</h1><p>The compiler team shipped incremental \
        compilation improvements. Compiler caches now survive restarts &amp; \
        the linker got faster.</p></body></html>";
    let result = generate_labels(html, 5);
    assert!(!result.is_too_short);
    assert_eq!(result.labels[0], "compiler");
    for label in &result.labels {
        assert!(!["font", "family", "serif", "window", "analytics"].contains(&label.as_str()));
    }
}

#[test]
fn text_without_words_is_empty_but_valid() {
    let text = "... --- !!! ??? 12345 67890 ... --- !!! ??? 12345 67890 ... ---";
    let result = generate_labels(text, 5);
    assert!(!result.is_too_short);
    assert!(result.labels.is_empty());
}

#[test]
fn script_routing_follows_majority() {
    assert_eq!(Script::detect(&clean(CJK_POST)), Script::Cjk);
    assert_eq!(Script::detect(&clean(BLOCKCHAIN_POST)), Script::Latin);

    // Mostly English with a few CJK characters stays on the word pipeline
    let mixed = format!("{BLOCKCHAIN_POST} 区块链");
    let result = generate_labels(&mixed, 5);
    assert_eq!(result.labels[0], "blockchain");
}

#[test]
fn labeler_is_reusable_and_deterministic() {
    let labeler = Labeler::new();
    let first = labeler.generate_labels(BLOCKCHAIN_POST, 3);
    for _ in 0..5 {
        assert_eq!(labeler.generate_labels(BLOCKCHAIN_POST, 3), first);
    }
}

#[test]
fn concurrent_calls_agree() {
    let expected = generate_labels(CJK_POST, 5);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| generate_labels(CJK_POST, 5)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// ============================================================
// Properties over arbitrary input
// ============================================================

fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![
        ".{0,300}",
        "[a-zA-Z ,.!?'<>/&;-]{0,400}",
        "[区块链技术金融银行中文世界，。 ]{0,200}",
        "(<p>|</p>|&amp;|&#20013;|Data|data|DATA| |中文|kernel){0,80}",
    ]
}

proptest! {
    #[test]
    fn labels_are_bounded_valid_and_unique(text in any_text(), max_labels in -10i64..20) {
        let result = generate_labels(&text, max_labels);
        let cap = effective_max_labels(max_labels);

        prop_assert!(result.labels.len() <= cap);

        let mut seen = HashSet::new();
        for label in &result.labels {
            let len = label.chars().count();
            prop_assert!((MIN_LABEL_LENGTH..=MAX_LABEL_LENGTH).contains(&len));
            prop_assert!(!label.contains('"') && !label.contains('\\'));
            let key = label.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
            prop_assert!(seen.insert(key), "duplicate label {}", label);
        }
    }

    #[test]
    fn short_cleaned_text_is_always_too_short(text in any_text()) {
        let result = generate_labels(&text, 5);
        if clean(&text).chars().count() < MIN_CONTENT_LENGTH {
            prop_assert!(result.is_too_short);
        }
        if result.is_too_short {
            prop_assert!(result.labels.is_empty());
        }
    }

    #[test]
    fn same_input_same_output(text in any_text(), max_labels in -3i64..8) {
        prop_assert_eq!(
            generate_labels(&text, max_labels),
            generate_labels(&text, max_labels)
        );
    }

    #[test]
    fn invalid_counts_match_default(text in any_text(), requested in prop_oneof![-1000i64..=0, 6i64..1000]) {
        prop_assert_eq!(generate_labels(&text, requested), generate_labels(&text, 5));
    }
}
