use anyhow::Result;
use async_trait::async_trait;

/// Produces a fresh version of a slide when it enters the neighborhood of
/// the current slide.
#[async_trait(?Send)]
pub trait ItemLoader<T: 'static> {
    async fn load(&self, item: T) -> Result<T>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

#[async_trait(?Send)]
impl<T: 'static> ItemLoader<T> for Identity {
    async fn load(&self, item: T) -> Result<T> {
        Ok(item)
    }
}
