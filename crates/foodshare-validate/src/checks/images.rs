//! Image file inputs.

use foodshare_model::ImageUpload;

use super::CheckResult;
use crate::issue::{Issue, MAX_IMAGE_SIZE, MIN_IMAGE_SIZE};
use crate::patterns::IMAGE_EXT_REGEX;

/// Check one image slot; `None` means no file was chosen.
pub fn check_image(slot: Option<&ImageUpload>) -> CheckResult {
    let Some(image) = slot else {
        return Err(Issue::ImageMissing);
    };
    if image.name.is_empty() {
        return Err(Issue::ImageNameEmpty);
    }
    if !IMAGE_EXT_REGEX.is_match(&image.name) {
        return Err(Issue::ImageExtension {
            name: image.name.clone(),
        });
    }
    if !(MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE).contains(&image.size) {
        return Err(Issue::ImageSize {
            name: image.name.clone(),
            size: image.size,
        });
    }
    Ok(())
}

/// Check every slot. At least one image is required, so an empty list
/// yields a single missing-image verdict.
pub fn check_images(slots: &[Option<ImageUpload>]) -> Vec<CheckResult> {
    if slots.is_empty() {
        return vec![Err(Issue::ImageMissing)];
    }
    slots.iter().map(|slot| check_image(slot.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_checks_in_order() {
        assert_eq!(check_image(None), Err(Issue::ImageMissing));
        assert_eq!(
            check_image(Some(&ImageUpload::new("", 6000))),
            Err(Issue::ImageNameEmpty)
        );
        assert!(matches!(
            check_image(Some(&ImageUpload::new("a.gif", 6000))),
            Err(Issue::ImageExtension { .. })
        ));
        assert!(matches!(
            check_image(Some(&ImageUpload::new("a.jpg", 4000))),
            Err(Issue::ImageSize { size: 4000, .. })
        ));
        assert_eq!(check_image(Some(&ImageUpload::new("a.jpg", 6000))), Ok(()));
    }

    #[test]
    fn size_bounds_are_inclusive() {
        assert!(check_image(Some(&ImageUpload::new("a.png", MIN_IMAGE_SIZE))).is_ok());
        assert!(check_image(Some(&ImageUpload::new("a.png", MAX_IMAGE_SIZE))).is_ok());
        assert!(check_image(Some(&ImageUpload::new("a.png", MAX_IMAGE_SIZE + 1))).is_err());
    }

    #[test]
    fn empty_list_fails() {
        assert_eq!(check_images(&[]), vec![Err(Issue::ImageMissing)]);
        let slots = vec![Some(ImageUpload::new("a.jpg", 6000)), None];
        let verdicts = check_images(&slots);
        assert!(verdicts[0].is_ok());
        assert_eq!(verdicts[1], Err(Issue::ImageMissing));
    }
}
