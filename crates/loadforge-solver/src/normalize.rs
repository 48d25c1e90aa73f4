//! Candidate normalization.
//!
//! Turns raw catalog entries into [`Piece`]s the search can use, dropping
//! everything that cannot take part in a build for the target class.

use loadforge_core::{
    ArmorSlot, CharacterClass, DefinitionSource, ItemCategory, LoadForgeError, Piece, Rarity,
    RawEntry, Result,
};
use tracing::debug;

/// Why a raw entry was left out of the candidate pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    NotArmor,
    WrongClass,
    UnknownSlot,
    BelowLegendary,
}

/// Checks one raw entry and projects it into a piece.
///
/// Stats come from `definitions`; a missing definition yields all-zero
/// stats rather than a rejection.
pub fn normalize_entry<D: DefinitionSource + ?Sized>(
    entry: &RawEntry,
    definitions: &D,
    target_class: CharacterClass,
) -> std::result::Result<Piece, Rejection> {
    if entry.category != ItemCategory::Armor {
        return Err(Rejection::NotArmor);
    }
    let class = CharacterClass::from_class_type(entry.class_type)
        .filter(|class| class.fits(target_class))
        .ok_or(Rejection::WrongClass)?;
    let slot = ArmorSlot::from_bucket_hash(entry.bucket_hash).ok_or(Rejection::UnknownSlot)?;
    let rarity = Rarity::from_tier_type(entry.tier_type).ok_or(Rejection::BelowLegendary)?;

    Ok(Piece::new(
        entry.instance_id.clone(),
        entry.item_hash,
        slot,
        rarity,
        class,
        definitions.base_stats(entry.item_hash),
    ))
}

/// Normalizes a whole catalog, preserving catalog order.
///
/// # Errors
///
/// Returns [`LoadForgeError::CatalogUnavailable`] when the definition
/// source is not loaded. Individual unusable entries are skipped, never
/// reported as errors.
pub fn normalize<D: DefinitionSource + ?Sized>(
    entries: &[RawEntry],
    definitions: &D,
    target_class: CharacterClass,
) -> Result<Vec<Piece>> {
    if !definitions.is_loaded() {
        return Err(LoadForgeError::CatalogUnavailable(
            "item definitions are not loaded".to_string(),
        ));
    }

    let mut pieces = Vec::with_capacity(entries.len());
    let mut rejected = 0usize;
    for entry in entries {
        match normalize_entry(entry, definitions, target_class) {
            Ok(piece) => pieces.push(piece),
            Err(_) => rejected += 1,
        }
    }

    debug!(
        event = "candidates_normalized",
        target_class = %target_class,
        entries = entries.len(),
        accepted = pieces.len(),
        rejected = rejected,
    );

    Ok(pieces)
}
