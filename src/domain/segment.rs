//! SMS segmentation: encoding detection, unit accounting, and part counts.

/// GSM 03.38 default alphabet, basic table (code points 0x00..=0x7F minus the
/// escape slot). One septet each.
///
/// Kept as a plain string so the membership table can be audited against the
/// standard row by row.
const GSM7_BASIC: &str = "@£$¥èéùìòÇ\nØø\rÅåΔ_ΦΓΛΩΠΨΣΘΞÆæßÉ \
                          !\"#¤%&'()*+,-./0123456789:;<=>?\
                          ¡ABCDEFGHIJKLMNOPQRSTUVWXYZÄÖÑܧ\
                          ¿abcdefghijklmnopqrstuvwxyzäöñüà";

/// GSM 03.38 extension table. Each member is sent as an escape pair and
/// costs two septets.
const GSM7_EXTENDED: &str = "\u{000C}^{}\\[~]|€";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Character encoding an SMS will be submitted with.
///
/// GSM-7 is used whenever every character of the message is representable in
/// the GSM 03.38 alphabet; otherwise the whole message falls back to UCS-2.
/// Encodings never mix within one message.
pub enum SmsEncoding {
    Gsm7,
    Ucs2,
}

impl SmsEncoding {
    /// Units that fit into a message carried in a single part.
    pub const fn single_part_capacity(self) -> usize {
        match self {
            Self::Gsm7 => 160,
            Self::Ucs2 => 70,
        }
    }

    /// Units per part once the concatenation header claims its share.
    pub const fn multipart_capacity(self) -> usize {
        match self {
            Self::Gsm7 => 153,
            Self::Ucs2 => 67,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How a message text maps onto SMS parts.
///
/// Invariant: `parts == 1` exactly when `units` fits
/// [`SmsEncoding::single_part_capacity`]; otherwise
/// `parts == units.div_ceil(multipart_capacity)` and `units_per_part` is the
/// reduced multipart capacity.
pub struct Segmentation {
    /// Encoding chosen for the whole message.
    pub encoding: SmsEncoding,
    /// Encoded units consumed: septets under GSM-7, UTF-16 code units under UCS-2.
    pub units: usize,
    /// SMS parts required to carry the message. At least 1, even when empty.
    pub parts: usize,
    /// Capacity of a single part under the chosen encoding and part count.
    pub units_per_part: usize,
}

impl Segmentation {
    fn from_units(encoding: SmsEncoding, units: usize) -> Self {
        let single = encoding.single_part_capacity();
        if units <= single {
            return Self {
                encoding,
                units,
                parts: 1,
                units_per_part: single,
            };
        }
        let per_part = encoding.multipart_capacity();
        Self {
            encoding,
            units,
            parts: units.div_ceil(per_part),
            units_per_part: per_part,
        }
    }

    /// Units still available before another part is needed.
    pub fn remaining_in_last_part(&self) -> usize {
        self.parts * self.units_per_part - self.units
    }
}

/// Segment a message the way the gateway will bill it.
///
/// Total over every string, including the empty one (0 units, 1 part). Cost
/// is one unit per basic GSM 03.38 character and two per extension-table
/// character; any character outside both tables switches the entire message
/// to UCS-2, where units are UTF-16 code units (astral characters count as
/// two).
pub fn segment(message: &str) -> Segmentation {
    match gsm7_units(message) {
        Some(units) => Segmentation::from_units(SmsEncoding::Gsm7, units),
        None => Segmentation::from_units(SmsEncoding::Ucs2, message.encode_utf16().count()),
    }
}

/// Septet count for a GSM-7-representable message, `None` when any character
/// falls outside both alphabet tables.
fn gsm7_units(message: &str) -> Option<usize> {
    let mut units = 0usize;
    for ch in message.chars() {
        if GSM7_BASIC.contains(ch) {
            units += 1;
        } else if GSM7_EXTENDED.contains(ch) {
            units += 2;
        } else {
            return None;
        }
    }
    Some(units)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Client-side credit estimate for a broadcast: one credit per part per
/// recipient.
///
/// The API remains the authority on the billed amount; this is the figure a
/// console shows before submitting.
pub struct CostEstimate {
    pub segmentation: Segmentation,
    pub recipients: usize,
    pub credits: u64,
}

impl CostEstimate {
    /// Combine a segmentation with a recipient count.
    pub fn new(segmentation: Segmentation, recipients: usize) -> Self {
        Self {
            segmentation,
            recipients,
            credits: segmentation.parts as u64 * recipients as u64,
        }
    }

    /// Estimate straight from message text.
    pub fn for_message(message: &str, recipients: usize) -> Self {
        Self::new(segment(message), recipients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_ascii_counts_one_unit_per_char() {
        let result = segment("Karibu SewMR SMS");
        assert_eq!(result.encoding, SmsEncoding::Gsm7);
        assert_eq!(result.units, 16);
        assert_eq!(result.parts, 1);
        assert_eq!(result.units_per_part, 160);
    }

    #[test]
    fn empty_message_is_one_empty_gsm7_part() {
        let result = segment("");
        assert_eq!(result.encoding, SmsEncoding::Gsm7);
        assert_eq!(result.units, 0);
        assert_eq!(result.parts, 1);
        assert_eq!(result.units_per_part, 160);
    }

    #[test]
    fn gsm7_single_part_boundary_is_160() {
        let at_limit = "a".repeat(160);
        let result = segment(&at_limit);
        assert_eq!(result.parts, 1);
        assert_eq!(result.units_per_part, 160);
        assert_eq!(result.remaining_in_last_part(), 0);

        let over_limit = "a".repeat(161);
        let result = segment(&over_limit);
        assert_eq!(result.parts, 2);
        assert_eq!(result.units_per_part, 153);
    }

    #[test]
    fn gsm7_multipart_uses_153_unit_parts() {
        assert_eq!(segment(&"a".repeat(306)).parts, 2);
        assert_eq!(segment(&"a".repeat(307)).parts, 3);
        assert_eq!(segment(&"a".repeat(459)).parts, 3);
        assert_eq!(segment(&"a".repeat(460)).parts, 4);
    }

    #[test]
    fn extension_table_chars_cost_two_units() {
        for ch in GSM7_EXTENDED.chars() {
            let message = format!("ab{ch}");
            let result = segment(&message);
            assert_eq!(result.encoding, SmsEncoding::Gsm7, "char {ch:?}");
            assert_eq!(result.units, 4, "char {ch:?}");
        }
    }

    #[test]
    fn euro_sign_tips_a_message_over_the_single_part_cliff() {
        // 158 septets + 2 for the escaped euro: exactly full.
        let mut message = "a".repeat(158);
        message.push('€');
        assert_eq!(segment(&message).parts, 1);

        // One more basic char and the euro no longer fits a single part.
        let mut message = "a".repeat(159);
        message.push('€');
        let result = segment(&message);
        assert_eq!(result.units, 161);
        assert_eq!(result.parts, 2);
    }

    #[test]
    fn accented_basic_table_members_stay_gsm7() {
        let result = segment("àèéùìòÇØøÅåÆæßÉÄÖÑܧ¡¿äöñü¤");
        assert_eq!(result.encoding, SmsEncoding::Gsm7);
        assert_eq!(result.units, 27);
    }

    #[test]
    fn greek_capitals_from_the_basic_table_stay_gsm7() {
        let result = segment("ΔΦΓΛΩΠΨΣΘΞ");
        assert_eq!(result.encoding, SmsEncoding::Gsm7);
        assert_eq!(result.units, 10);
    }

    #[test]
    fn char_outside_both_tables_forces_ucs2_for_whole_message() {
        let result = segment("bei yake ni sh 5000 ā");
        assert_eq!(result.encoding, SmsEncoding::Ucs2);
        assert_eq!(result.units, 21);
        assert_eq!(result.parts, 1);
        assert_eq!(result.units_per_part, 70);
    }

    #[test]
    fn escape_code_point_is_not_message_text() {
        assert_eq!(segment("ok\u{1B}").encoding, SmsEncoding::Ucs2);
    }

    #[test]
    fn ucs2_units_are_utf16_code_units() {
        // U+1F642 is a surrogate pair: 2 code units, 1 scalar.
        let result = segment("🙂");
        assert_eq!(result.encoding, SmsEncoding::Ucs2);
        assert_eq!(result.units, 2);

        let result = segment("habari 🙂🙂");
        assert_eq!(result.units, 11);
    }

    #[test]
    fn ucs2_single_part_boundary_is_70() {
        let mut message = "ā".to_owned();
        message.push_str(&"a".repeat(69));
        let result = segment(&message);
        assert_eq!(result.encoding, SmsEncoding::Ucs2);
        assert_eq!(result.units, 70);
        assert_eq!(result.parts, 1);

        message.push('a');
        let result = segment(&message);
        assert_eq!(result.units, 71);
        assert_eq!(result.parts, 2);
        assert_eq!(result.units_per_part, 67);
    }

    #[test]
    fn ucs2_multipart_uses_67_unit_parts() {
        let mut message = "ā".to_owned();
        message.push_str(&"a".repeat(133));
        assert_eq!(segment(&message).parts, 2);

        message.push('a');
        assert_eq!(segment(&message).parts, 3);
    }

    #[test]
    fn part_count_matches_ceiling_division_for_long_messages() {
        for len in [161, 200, 305, 306, 307, 1000, 2500] {
            let result = segment(&"a".repeat(len));
            assert_eq!(result.parts, len.div_ceil(153), "len {len}");
        }
    }

    #[test]
    fn segment_is_pure() {
        let message = "mimi ni mtest € 🙂";
        assert_eq!(segment(message), segment(message));
    }

    #[test]
    fn cost_estimate_multiplies_parts_by_recipients() {
        let estimate = CostEstimate::for_message(&"a".repeat(161), 250);
        assert_eq!(estimate.segmentation.parts, 2);
        assert_eq!(estimate.recipients, 250);
        assert_eq!(estimate.credits, 500);

        let estimate = CostEstimate::for_message("hi", 0);
        assert_eq!(estimate.credits, 0);
    }
}
