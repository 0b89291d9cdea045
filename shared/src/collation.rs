use std::cmp::Ordering;

/// Locale-aware string comparison used for phonetic keys and option lists.
///
/// The browser build compares through `Intl.Collator`; [`KanaCollation`] is the
/// native implementation used everywhere else.
pub trait Collation {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<C: Collation + ?Sized> Collation for &C {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        (**self).compare(a, b)
    }
}

/// Japanese-oriented collation in three levels:
///
/// 1. base letters: katakana folded to hiragana, voicing marks and small kana
///    folded away, full-width ASCII folded to ASCII, ASCII case folded
/// 2. voicing and small kana distinguished
/// 3. raw code points
///
/// So `かき` < `がく` < `きく`, and `カ` sorts next to `か` instead of after every
/// hiragana.
#[derive(Debug, Clone, Copy, Default)]
pub struct KanaCollation;

impl Collation for KanaCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let primary = a.chars().map(primary_char).cmp(b.chars().map(primary_char));
        primary
            .then_with(|| a.chars().map(secondary_char).cmp(b.chars().map(secondary_char)))
            .then_with(|| a.cmp(b))
    }
}

fn secondary_char(c: char) -> char {
    let c = match c as u32 {
        // Katakana ァ..ヶ to hiragana
        0x30A1..=0x30F6 => char::from_u32(c as u32 - 0x60).unwrap_or(c),
        // Full-width ASCII
        0xFF01..=0xFF5E => char::from_u32(c as u32 - 0xFEE0).unwrap_or(c),
        _ => c,
    };
    c.to_ascii_lowercase()
}

fn primary_char(c: char) -> char {
    let c = secondary_char(c);
    let code = c as u32;
    let base = match code {
        // ぁぃぅぇぉ
        0x3041..=0x304A if (code - 0x3041) % 2 == 0 => code + 1,
        // か..ぢ: voiced forms sit right after their base
        0x304B..=0x3062 if (code - 0x304B) % 2 == 1 => code - 1,
        // っ
        0x3063 => 0x3064,
        // つ..ど
        0x3064..=0x3069 if (code - 0x3064) % 2 == 1 => code - 1,
        // は..ぽ: base, voiced, semi-voiced
        0x306F..=0x307D => 0x306F + (code - 0x306F) / 3 * 3,
        // ゃゅょ
        0x3083 | 0x3085 | 0x3087 => code + 1,
        // ゎ
        0x308E => 0x308F,
        // ゔ
        0x3094 => 0x3046,
        // ゕゖ
        0x3095 => 0x304B,
        0x3096 => 0x3051,
        _ => code,
    };
    char::from_u32(base).unwrap_or(c)
}
