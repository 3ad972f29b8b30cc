//! CSS class strings for the new button component

use crate::size::SizeCategory;
use crate::variant::Variant;

/// Classes shared by every button
pub const BASE_CLASSES: &str = "inline-flex items-center justify-center rounded-lg font-medium \
transition-colors duration-200 focus:outline-none focus:ring-2 focus:ring-offset-1 \
disabled:opacity-50 disabled:pointer-events-none cursor-pointer";

pub fn variant_classes(variant: Variant) -> &'static str {
    match variant {
        Variant::Primary => {
            "bg-pink-200 text-neutrals-0 hover:bg-pink-300 border border-transparent focus:ring-pink-200"
        }
        Variant::Secondary => {
            "bg-neutrals-0 text-neutrals-500 border border-neutrals-200 hover:bg-neutrals-50 focus:ring-neutrals-200"
        }
        Variant::Ghost => "bg-transparent text-neutrals-500 hover:bg-neutrals-50 focus:ring-neutrals-200",
    }
}

pub fn size_classes(size: SizeCategory) -> &'static str {
    match size {
        SizeCategory::Large => "btn-large text-base font-medium",
        SizeCategory::Regular => "btn-regular text-sm font-medium",
        SizeCategory::Small => "btn-small text-sm font-medium",
        SizeCategory::Mini => "btn-mini text-xs font-medium",
    }
}

/// Full class list for a button: base, then variant, then size
pub fn button_classes(variant: Variant, size: SizeCategory) -> String {
    [BASE_CLASSES, variant_classes(variant), size_classes(size)].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let classes = button_classes(Variant::default(), SizeCategory::default());
        assert!(classes.starts_with(BASE_CLASSES));
        assert!(classes.contains("bg-neutrals-0"));
        assert!(classes.ends_with("btn-regular text-sm font-medium"));
    }

    #[test]
    fn test_variant_then_size_order() {
        let classes = button_classes(Variant::Ghost, SizeCategory::Mini);
        let variant = classes.find("bg-transparent").unwrap();
        let size = classes.find("btn-mini").unwrap();
        assert!(variant < size);
        assert!(classes.ends_with("btn-mini text-xs font-medium"));
    }
}
