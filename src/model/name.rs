//! Letter-case conventions shared by the parser and the record builder.
//!
//! TDB files are conventionally written in upper case (`PB1TE1`, `HCP_A3`),
//! while the output record wants chemical casing (`PbTe`). The helpers here
//! work on ASCII letters only; any other character passes through unchanged
//! and acts as a word boundary.

/// Returns `true` if `s` contains at least one ASCII letter.
///
/// Element rows such as `ELEMENT /- ELECTRON_GAS ...` carry no letter in
/// their symbol and are dropped by the parser on this test.
pub fn has_letter(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_alphabetic())
}

/// Title-cases every run of ASCII letters in `s`.
///
/// A run written in a single case (`PBTE`, `te`) becomes capitalized
/// (`Pbte`, `Te`). A run that already mixes cases (`PbTe`) is left as it is,
/// so text that was cased before is not flattened again.
///
/// ```
/// use tdb_ingester::title_case;
///
/// assert_eq!(title_case("PB1TE1"), "Pb1Te1");
/// assert_eq!(title_case("HCP_A3"), "Hcp_A3");
/// assert_eq!(title_case("PbTe"), "PbTe");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run = String::new();

    for ch in s.chars() {
        if ch.is_ascii_alphabetic() {
            run.push(ch);
        } else {
            flush_run(&mut out, &mut run);
            out.push(ch);
        }
    }
    flush_run(&mut out, &mut run);

    out
}

fn flush_run(out: &mut String, run: &mut String) {
    if run.is_empty() {
        return;
    }

    let uniform = run.bytes().all(|b| b.is_ascii_uppercase())
        || run.bytes().all(|b| b.is_ascii_lowercase());

    if uniform {
        let mut chars = run.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
        }
    } else {
        out.push_str(run);
    }

    run.clear();
}
