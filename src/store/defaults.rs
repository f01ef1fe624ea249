// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in fallback table used when the basic dataset file is missing.

use super::dataset::Dataset;
use crate::types::AnatomicIndex;

const ANATOMIC_EN: [(&str, AnatomicIndex); 19] = [
    ("brain", 0),
    ("breast", 1),
    ("bladder", 2),
    ("kidney", 3),
    ("prostate", 4),
    ("testis", 5),
    ("lung", 6),
    ("pancreas", 7),
    ("liver", 8),
    ("skin", 9),
    ("ovary", 10),
    ("cervix", 11),
    ("uterus", 12),
    ("colon", 13),
    ("esophagus", 14),
    ("stomach", 15),
    ("thyroid", 16),
    ("adrenal gland", 17),
    ("soft tissue", 18),
];

const ANATOMIC_UK: [(&str, AnatomicIndex); 19] = [
    ("головний мозок", 0),
    ("молочна залоза", 1),
    ("сечовий міхур", 2),
    ("нирка", 3),
    ("передміхурова залоза", 4),
    ("яєчко", 5),
    ("легеня", 6),
    ("підшлункова залоза", 7),
    ("печінка", 8),
    ("шкіра", 9),
    ("яєчник", 10),
    ("шийка матки", 11),
    ("матка", 12),
    ("товста кишка", 13),
    ("стравохід", 14),
    ("шлунок", 15),
    ("щитоподібна залоза", 16),
    ("надниркова залоза", 17),
    ("м'які тканини", 18),
];

/// The 19-site English/Ukrainian name table.
pub fn builtin_dataset() -> Dataset {
    Dataset {
        anatomic: ANATOMIC_EN
            .iter()
            .map(|&(name, index)| (name.to_string(), index))
            .collect(),
        anatomic_ukrainian: ANATOMIC_UK
            .iter()
            .map(|&(name, index)| (name.to_string(), index))
            .collect(),
        ..Dataset::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ANATOMIC_SITE_COUNT;

    #[test]
    fn builtin_covers_every_site_once() {
        let dataset = builtin_dataset();
        for map in [&dataset.anatomic, &dataset.anatomic_ukrainian] {
            assert_eq!(map.len(), ANATOMIC_SITE_COUNT);
            let mut indices: Vec<_> = map.values().copied().collect();
            indices.sort_unstable();
            assert_eq!(indices, (0..=18).collect::<Vec<AnatomicIndex>>());
        }
    }

    #[test]
    fn builtin_names_are_already_folded() {
        let dataset = builtin_dataset();
        for name in dataset.anatomic.keys().chain(dataset.anatomic_ukrainian.keys()) {
            assert_eq!(name, &name.to_lowercase());
        }
    }
}
