//! Known column layouts of the export.
//!
//! Each franchise group exports a different set of populated columns, so the
//! position of the address and phone depends on how many tokens the row
//! produced. Supporting another layout means adding a variant and a row to
//! [`LAYOUTS`].

/// Column layout of one row, selected from its token count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVariant {
    /// 32 tokens: the parking-type column is populated.
    Extended,
    /// 24 tokens: the university campus franchise group.
    Campus,
    /// Any other count, 26 being the common one.
    Standard,
}

/// Token positions of the fields taken at fixed offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub id: usize,
    pub dining_hours: usize,
    pub drive_thru_hours: usize,
    pub address: usize,
    pub phone: usize,
}

const LAYOUTS: [(LayoutVariant, Option<usize>, ColumnMap); 3] = [
    (
        LayoutVariant::Extended,
        Some(32),
        ColumnMap {
            id: 0,
            dining_hours: 2,
            drive_thru_hours: 4,
            address: 24,
            phone: 27,
        },
    ),
    (
        LayoutVariant::Campus,
        Some(24),
        ColumnMap {
            id: 0,
            dining_hours: 2,
            drive_thru_hours: 4,
            address: 18,
            phone: 20,
        },
    ),
    (
        LayoutVariant::Standard,
        None,
        ColumnMap {
            id: 0,
            dining_hours: 2,
            drive_thru_hours: 4,
            address: 24,
            phone: 26,
        },
    ),
];

impl LayoutVariant {
    /// Pick the layout for a row with `token_count` tokens.
    ///
    /// Counts without a dedicated layout fall back to [`LayoutVariant::Standard`].
    #[must_use]
    pub fn for_token_count(token_count: usize) -> Self {
        LAYOUTS
            .iter()
            .find(|(_, count, _)| *count == Some(token_count))
            .map_or(LayoutVariant::Standard, |(variant, _, _)| *variant)
    }

    #[must_use]
    pub fn columns(self) -> ColumnMap {
        LAYOUTS
            .iter()
            .find(|(variant, _, _)| *variant == self)
            .map(|(_, _, columns)| *columns)
            .unwrap_or(LAYOUTS[LAYOUTS.len() - 1].2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_two_tokens_is_extended() {
        let layout = LayoutVariant::for_token_count(32);
        assert_eq!(layout, LayoutVariant::Extended);
        let cols = layout.columns();
        assert_eq!((cols.address, cols.phone), (24, 27));
    }

    #[test]
    fn twenty_four_tokens_is_campus() {
        let layout = LayoutVariant::for_token_count(24);
        assert_eq!(layout, LayoutVariant::Campus);
        let cols = layout.columns();
        assert_eq!((cols.address, cols.phone), (18, 20));
    }

    #[test]
    fn other_counts_fall_back_to_standard() {
        for count in [0, 7, 25, 26, 31, 33] {
            assert_eq!(
                LayoutVariant::for_token_count(count),
                LayoutVariant::Standard,
                "count {count}"
            );
        }
        let cols = LayoutVariant::Standard.columns();
        assert_eq!((cols.address, cols.phone), (24, 26));
    }

    #[test]
    fn id_and_hours_positions_are_shared() {
        for variant in [
            LayoutVariant::Extended,
            LayoutVariant::Campus,
            LayoutVariant::Standard,
        ] {
            let cols = variant.columns();
            assert_eq!(
                (cols.id, cols.dining_hours, cols.drive_thru_hours),
                (0, 2, 4)
            );
        }
    }
}
