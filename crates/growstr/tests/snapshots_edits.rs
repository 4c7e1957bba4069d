#![expect(missing_docs)]

use growstr::{ByteBuffer, CharBuffer, GrowthPolicy, WideBuffer};

fn state(buf: &ByteBuffer) -> String {
    format!("{buf:?} len={} cap={}", buf.len(), buf.capacity())
}

#[test]
fn snapshot_edit_sequence() {
    let mut buf = ByteBuffer::from("Hello world!");
    insta::assert_snapshot!(state(&buf), @r#""Hello world!" len=12 cap=13"#);

    buf.replace_first("Hello", "Goodbye").unwrap();
    insta::assert_snapshot!(state(&buf), @r#""Goodbye world!" len=14 cap=8207"#);

    buf.insert(", cruel", 7).unwrap();
    insta::assert_snapshot!(state(&buf), @r#""Goodbye, cruel world!" len=21 cap=8207"#);

    buf.erase(7, 7);
    insta::assert_snapshot!(state(&buf), @r#""Goodbye world!" len=14 cap=8207"#);

    buf.remove(b'o');
    insta::assert_snapshot!(state(&buf), @r#""Gdbye wrld!" len=11 cap=8207"#);

    buf.reverse();
    insta::assert_snapshot!(state(&buf), @r#""!dlrw eybdG" len=11 cap=8207"#);

    buf.shrink();
    insta::assert_snapshot!(state(&buf), @r#""!dlrw eybdG" len=11 cap=12"#);

    buf.clear();
    insta::assert_snapshot!(state(&buf), @r#""" len=0 cap=12"#);
}

#[test]
fn snapshot_compact_growth() {
    let mut buf = ByteBuffer::with_policy(GrowthPolicy::compact());
    let mut capacities = Vec::new();
    for chunk in ["abc", "defg", "hi", "jklmnopq", "r"] {
        buf.append(chunk).unwrap();
        capacities.push(buf.capacity());
    }
    insta::assert_snapshot!(format!("{capacities:?}"), @"[8, 8, 26, 26, 26]");
    insta::assert_snapshot!(buf.to_string(), @"abcdefghijklmnopqr");
}

#[test]
fn snapshot_debug_rendering() {
    insta::assert_debug_snapshot!(ByteBuffer::from("tab\there"), @r#""tab\there""#);
    insta::assert_debug_snapshot!(WideBuffer::from("ünï"), @r#""ünï""#);
    insta::assert_debug_snapshot!(CharBuffer::from("quote\"d"), @r#""quote\"d""#);
}

#[test]
fn snapshot_substrings() {
    let source = ByteBuffer::from("The quick brown fox");
    let words: Vec<String> = [(0, 3), (4, 5), (10, 5), (16, 100), (40, 2)]
        .into_iter()
        .map(|(start, count)| source.substring(start, count).to_string())
        .collect();
    insta::assert_snapshot!(words.join("|"), @"The|quick|brown|fox|");
}
