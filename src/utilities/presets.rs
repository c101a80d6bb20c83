/// Prompt and output count fed into the generation request. Configuration
/// data, not logic.
pub struct Preset {
    pub prompt: &'static str,
    pub num_images: u8,
}

const MAIN_PHOTO: Preset = Preset {
    prompt: "photorealistic ecommerce hero shot, mobile-photography, soft daylight, clean warm \
             bedroom, focus on garment details, 3:4 aspect ratio, high resolution, no watermark, \
             no logos, realistic skin",
    num_images: 1,
};

const TWELVE_SHOT_SET: Preset = Preset {
    prompt: "photorealistic lifestyle photoshoot for fashion e-commerce, consistent style and \
             lighting, mix of full-body, 3/4, side, back, close-up fabric, minimal interior, 3:4 \
             aspect ratio, high resolution, no watermark",
    num_images: 12,
};

const FAKE_REVIEW: Preset = Preset {
    prompt: "candid customer review photo of the garment worn at home, amateur smartphone \
             quality, natural indoor light, everyday interior, realistic fabric folds, 3:4 \
             aspect ratio, no watermark, no logos",
    num_images: 1,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    MainPhoto,
    TwelveShotSet,
    FakeReview,
}

impl Mode {
    pub const ALL: [Self; 3] = [Self::MainPhoto, Self::TwelveShotSet, Self::FakeReview];

    pub const fn preset(self) -> &'static Preset {
        match self {
            Self::MainPhoto => &MAIN_PHOTO,
            Self::TwelveShotSet => &TWELVE_SHOT_SET,
            Self::FakeReview => &FAKE_REVIEW,
        }
    }

    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::MainPhoto => "📸 Главное фото",
            Self::TwelveShotSet => "📷 Фотосессия (12 снимков)",
            Self::FakeReview => "💬 Фото для отзыва",
        }
    }

    pub const fn instruction(self) -> &'static str {
        match self {
            Self::MainPhoto => "Отправьте фото товара — сделаю главное фото (3:4, студийный стиль).",
            Self::TwelveShotSet => {
                "Отправьте фото товара — сделаю фотосессию из 12 снимков (3:4, единый стиль)."
            }
            Self::FakeReview => {
                "Отправьте фото товара — сделаю живое фото как из отзыва покупателя."
            }
        }
    }

    pub fn from_menu_label(text: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.menu_label() == text)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn preset_counts() {
        assert_eq!(Mode::MainPhoto.preset().num_images, 1);
        assert_eq!(Mode::TwelveShotSet.preset().num_images, 12);
        assert_eq!(Mode::FakeReview.preset().num_images, 1);
    }

    #[test]
    fn prompts_not_empty() {
        for mode in Mode::ALL {
            assert!(!mode.preset().prompt.is_empty());
            assert!(!mode.instruction().is_empty());
        }
    }

    #[test]
    fn menu_labels_round_trip() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_menu_label(mode.menu_label()), Some(mode));
        }

        assert_eq!(Mode::from_menu_label("привет"), None);
    }

    #[test]
    fn default_mode_is_main_photo() {
        assert_eq!(Mode::default(), Mode::MainPhoto);
    }
}
