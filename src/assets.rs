//! Image manifest and async batch loading
//!
//! Every image the game draws is loaded up front into an immutable
//! [`AssetSet`]. The loop never starts unless all of them arrive.

use thiserror::Error;

use crate::Size;
use crate::consts::PLAYER_FRAMES;
use crate::sim::SpriteMetrics;

/// Startup failures
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load image '{path}'")]
    Load { path: String },

    #[error("image '{path}' has no intrinsic size")]
    EmptySize { path: String },

    #[error("platform unavailable: {0}")]
    Platform(String),
}

/// Anything the backend can draw that knows its own pixel size
pub trait Image {
    fn size(&self) -> Size;
}

/// Source of decoded images (browser `<img>` elements, test fakes, ...)
#[allow(async_fn_in_trait)]
pub trait ImageLoader {
    type Image: Image;

    async fn load(&self, path: &str) -> Result<Self::Image, AssetError>;
}

/// Every drawable the game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    /// Walk-cycle frame (0 = idle)
    Player(usize),
    LeftButton,
    RightButton,
    Object,
    Reward,
}

impl Sprite {
    /// File name relative to the image root
    pub fn file(self) -> &'static str {
        match self {
            Sprite::Background => "images/background2.png",
            Sprite::Player(0) => "images/dog1.png",
            Sprite::Player(_) => "images/dog2.png",
            Sprite::LeftButton => "images/left1.png",
            Sprite::RightButton => "images/right1.png",
            Sprite::Object => "images/niku.png",
            Sprite::Reward => "images/heart1.png",
        }
    }

    pub fn path(self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.file())
    }
}

/// All loaded images
#[derive(Debug, Clone)]
pub struct AssetSet<I> {
    pub background: I,
    pub player: [I; PLAYER_FRAMES],
    pub left_button: I,
    pub right_button: I,
    pub object: I,
    pub reward: I,
}

impl<I: Image> AssetSet<I> {
    /// Load every image in manifest order, failing on the first bad one
    pub async fn load<L>(loader: &L, base: &str) -> Result<Self, AssetError>
    where
        L: ImageLoader<Image = I>,
    {
        let background = load_one(loader, base, Sprite::Background).await?;
        let player = [
            load_one(loader, base, Sprite::Player(0)).await?,
            load_one(loader, base, Sprite::Player(1)).await?,
        ];
        let left_button = load_one(loader, base, Sprite::LeftButton).await?;
        let right_button = load_one(loader, base, Sprite::RightButton).await?;
        let object = load_one(loader, base, Sprite::Object).await?;
        let reward = load_one(loader, base, Sprite::Reward).await?;

        log::info!("Loaded {} images", PLAYER_FRAMES + 5);
        Ok(Self {
            background,
            player,
            left_button,
            right_button,
            object,
            reward,
        })
    }

    pub fn get(&self, sprite: Sprite) -> &I {
        match sprite {
            Sprite::Background => &self.background,
            Sprite::Player(frame) => &self.player[frame % PLAYER_FRAMES],
            Sprite::LeftButton => &self.left_button,
            Sprite::RightButton => &self.right_button,
            Sprite::Object => &self.object,
            Sprite::Reward => &self.reward,
        }
    }

    /// Sizes the simulation hit-tests against
    pub fn metrics(&self) -> SpriteMetrics {
        SpriteMetrics {
            player: self.player.each_ref().map(Image::size),
            object: self.object.size(),
            reward: self.reward.size(),
        }
    }
}

async fn load_one<L: ImageLoader>(
    loader: &L,
    base: &str,
    sprite: Sprite,
) -> Result<L::Image, AssetError> {
    let path = sprite.path(base);
    let image = loader.load(&path).await.inspect_err(|e| log::error!("{e}"))?;
    let size = image.size();
    if size.width <= 0.0 || size.height <= 0.0 {
        return Err(AssetError::EmptySize { path });
    }
    log::debug!("Loaded {} ({}x{})", path, size.width, size.height);
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct FakeImage(Size);

    impl Image for FakeImage {
        fn size(&self) -> Size {
            self.0
        }
    }

    #[derive(Default)]
    struct FakeLoader {
        sizes: HashMap<String, Size>,
        requested: RefCell<Vec<String>>,
    }

    impl FakeLoader {
        fn complete() -> Self {
            let mut loader = Self::default();
            for (file, size) in [
                ("images/background2.png", Size::new(800.0, 600.0)),
                ("images/dog1.png", Size::new(70.0, 60.0)),
                ("images/dog2.png", Size::new(70.0, 60.0)),
                ("images/left1.png", Size::new(100.0, 100.0)),
                ("images/right1.png", Size::new(100.0, 100.0)),
                ("images/niku.png", Size::new(40.0, 30.0)),
                ("images/heart1.png", Size::new(300.0, 280.0)),
            ] {
                loader.sizes.insert(format!("./{file}"), size);
            }
            loader
        }
    }

    impl ImageLoader for FakeLoader {
        type Image = FakeImage;

        async fn load(&self, path: &str) -> Result<FakeImage, AssetError> {
            self.requested.borrow_mut().push(path.to_string());
            self.sizes
                .get(path)
                .copied()
                .map(FakeImage)
                .ok_or_else(|| AssetError::Load {
                    path: path.to_string(),
                })
        }
    }

    #[test]
    fn test_load_all_and_derive_metrics() {
        let loader = FakeLoader::complete();
        let assets = pollster::block_on(AssetSet::load(&loader, ".")).unwrap();

        let metrics = assets.metrics();
        assert_eq!(metrics.player, [Size::new(70.0, 60.0); PLAYER_FRAMES]);
        assert_eq!(metrics.object, Size::new(40.0, 30.0));
        assert_eq!(metrics.reward, Size::new(300.0, 280.0));
        assert_eq!(loader.requested.borrow().len(), 7);
        assert_eq!(assets.get(Sprite::Player(3)).size(), Size::new(70.0, 60.0));
    }

    #[test]
    fn test_walk_frames_keep_their_own_sizes() {
        let mut loader = FakeLoader::complete();
        loader
            .sizes
            .insert("./images/dog2.png".to_string(), Size::new(100.0, 66.0));

        let metrics = pollster::block_on(AssetSet::load(&loader, ".")).unwrap().metrics();
        assert_eq!(metrics.player_frame(0), Size::new(70.0, 60.0));
        assert_eq!(metrics.player_frame(1), Size::new(100.0, 66.0));
    }

    #[test]
    fn test_missing_image_is_fatal() {
        let mut loader = FakeLoader::complete();
        loader.sizes.remove("./images/niku.png");

        let err = pollster::block_on(AssetSet::load(&loader, "./")).unwrap_err();
        assert!(matches!(err, AssetError::Load { ref path } if path == "./images/niku.png"));
        // Loading stops at the first failure
        assert_eq!(loader.requested.borrow().last().unwrap(), "./images/niku.png");
        assert!(!loader.requested.borrow().iter().any(|p| p.ends_with("heart1.png")));
    }

    #[test]
    fn test_zero_sized_image_is_rejected() {
        let mut loader = FakeLoader::complete();
        loader
            .sizes
            .insert("./images/heart1.png".to_string(), Size::new(0.0, 0.0));

        let err = pollster::block_on(AssetSet::load(&loader, ".")).unwrap_err();
        assert!(matches!(err, AssetError::EmptySize { .. }));
        assert_eq!(err.to_string(), "image './images/heart1.png' has no intrinsic size");
    }

    #[test]
    fn test_sprite_paths() {
        assert_eq!(Sprite::Object.path("assets/"), "assets/images/niku.png");
        assert_eq!(Sprite::Player(1).path("."), "./images/dog2.png");
    }
}
