/// Human-readable name for an exercise id.
///
/// Hyphens become spaces and the result is title-cased: a letter is
/// uppercased when it follows a non-letter and lowercased otherwise, so
/// `bulgarian-split-squat` becomes `Bulgarian Split Squat` and `3d-jump`
/// becomes `3D Jump`.
pub fn display_name(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut after_letter = false;

    for c in id.chars() {
        let c = if c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if after_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(c);
            after_letter = false;
        }
    }

    out
}
