#![no_main]

use arbitrary::Arbitrary;
use growstr::ByteBuffer;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Append(Vec<u8>),
    Insert { pos: u8, data: Vec<u8> },
    InsertWithin { pos: u8, start: u8, count: u8 },
    Erase { pos: u8, count: u8 },
    Remove(u8),
    ReplaceRange { start: u8, count: u8, data: Vec<u8> },
    ReplaceFirst { needle: Vec<u8>, data: Vec<u8> },
    ReverseRange { start: u8, end: u8 },
    Resize { len: u8, value: u8 },
    RetainRange { start: u8, count: u8 },
    Assign(Vec<u8>),
    Clear,
    Shrink,
}

fn apply(buf: &mut ByteBuffer, model: &mut Vec<u8>, op: &Op) {
    let len = model.len();
    match op {
        Op::Append(data) => {
            buf.append(data).unwrap();
            model.extend_from_slice(data);
        }
        Op::Insert { pos, data } => {
            let pos = usize::from(*pos);
            buf.insert(data, pos).unwrap();
            if pos <= len {
                model.splice(pos..pos, data.iter().copied());
            }
        }
        Op::InsertWithin { pos, start, count } => {
            let (pos, start, count) = (usize::from(*pos), usize::from(*start), usize::from(*count));
            buf.insert_within(pos, start, count).unwrap();
            if pos <= len && start <= len {
                let fragment = model[start..start + count.min(len - start)].to_vec();
                model.splice(pos..pos, fragment);
            }
        }
        Op::Erase { pos, count } => {
            let (pos, count) = (usize::from(*pos), usize::from(*count));
            buf.erase(pos, count);
            if pos < len {
                model.drain(pos..pos + count.min(len - pos));
            }
        }
        Op::Remove(value) => {
            let removed = buf.remove(*value);
            if *value != 0 {
                let before = model.len();
                model.retain(|el| el != value);
                assert_eq!(removed, before - model.len());
            } else {
                assert_eq!(removed, 0);
            }
        }
        Op::ReplaceRange { start, count, data } => {
            let (start, count) = (usize::from(*start), usize::from(*count));
            buf.replace_range(start, count, data).unwrap();
            if start < len && count <= len - start {
                model.splice(start..start + count, data.iter().copied());
            }
        }
        Op::ReplaceFirst { needle, data } => {
            let replaced = buf.replace_first(needle, data).unwrap();
            let found = (!needle.is_empty() && needle.len() <= len)
                .then(|| model.windows(needle.len()).position(|w| w == &needle[..]))
                .flatten();
            assert_eq!(replaced, found.is_some());
            if let Some(pos) = found {
                model.splice(pos..pos + needle.len(), data.iter().copied());
            }
        }
        Op::ReverseRange { start, end } => {
            let (start, end) = (usize::from(*start), usize::from(*end));
            buf.reverse_range(start, end);
            if start < end && end < len {
                model[start..=end].reverse();
            }
        }
        Op::Resize { len: new_len, value } => {
            buf.resize(usize::from(*new_len), *value).unwrap();
            model.resize(usize::from(*new_len), *value);
        }
        Op::RetainRange { start, count } => {
            let (start, count) = (usize::from(*start), usize::from(*count));
            buf.retain_range(start, count);
            if start < len && count > 0 {
                model.truncate(start + count.min(len - start));
                model.drain(..start);
            }
        }
        Op::Assign(data) => {
            buf.assign(data).unwrap();
            if !data.is_empty() {
                model.clone_from(data);
            }
        }
        Op::Clear => {
            buf.clear();
            model.clear();
        }
        Op::Shrink => buf.shrink(),
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut buf = ByteBuffer::new();
    let mut model = Vec::new();
    for op in &ops {
        apply(&mut buf, &mut model, op);
        assert_eq!(buf.as_slice(), &model[..], "after {op:?}");
        assert_eq!(buf.as_terminated().last(), Some(&0));
        assert!(buf.capacity() > buf.len());
    }
});
