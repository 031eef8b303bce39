use log::{debug, warn};
use std::time::Duration;
use thiserror::Error;

use self::neighborhood::{load_neighborhood, neighbor_indices};
use self::step::{Direction, Track};

pub use self::control::{Control, KeyOutcome};
pub use self::loader::{Identity, ItemLoader};
pub use self::observer::{SlideObserver, SlideView};
pub use self::settings::Settings;

mod control;
pub mod loader;
mod neighborhood;
mod observer;
mod settings;
mod step;


#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("Every reachable slide is the skipped slide #{skip_index}")]
    InfiniteLoop { skip_index: usize },
    #[error("Slide #{index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },
    #[error("Invalid slide settings: {0}")]
    InvalidSettings(&'static str),
    #[error("Could not load slides: {0:#}")]
    Loader(anyhow::Error),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Playback {
    Idle,
    AutoPlaying { time_elapsed: Duration },
}

/// Keeps track of the current slide in a looping sequence and keeps the
/// slides around it loaded.
///
/// Time only moves forward through [`SlidesNavigator::tick`], so the owner
/// decides which clock drives auto-advance.
pub struct SlidesNavigator<T, L = Identity, O = ()> {
    slides: Vec<T>,
    current_index: Option<usize>,
    settings: Settings,
    playback: Playback,
    loader: L,
    observer: O,
}

impl<T, L, O> SlidesNavigator<T, L, O>
where
    T: Clone + 'static,
    L: ItemLoader<T>,
    O: SlideObserver<T>,
{
    pub fn new(
        slides: Vec<T>,
        settings: Settings,
        loader: L,
        observer: O,
    ) -> Result<Self, NavigationError> {
        validate(&settings, slides.len())?;
        let current_index = if slides.is_empty() { None } else { Some(0) };
        let playback = if settings.auto_advance {
            Playback::AutoPlaying {
                time_elapsed: Duration::default(),
            }
        } else {
            Playback::Idle
        };
        Ok(SlidesNavigator {
            slides,
            current_index,
            settings,
            playback,
            loader,
            observer,
        })
    }

    /// Picks the slide to start from without notifying the observer, which
    /// first hears about it in [`SlidesNavigator::begin`].
    pub fn starting_at(mut self, index: usize) -> Result<Self, NavigationError> {
        if index >= self.slides.len() {
            return Err(NavigationError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        self.current_index = Some(index);
        Ok(self)
    }

    /// Renders the first slide and loads its neighborhood.
    pub async fn begin(&mut self) -> Result<(), NavigationError> {
        self.render();
        self.process_current_neighborhood().await
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    pub fn current_slide(&self) -> Option<&T> {
        self.current_index.and_then(|index| self.slides.get(index))
    }

    pub fn is_last_slide(&self) -> bool {
        match self.current_index {
            Some(index) => index + 1 == self.slides.len(),
            None => false,
        }
    }

    pub fn set_current_index(&mut self, index: usize) -> Result<(), NavigationError> {
        if index >= self.slides.len() {
            return Err(NavigationError::OutOfRange {
                index,
                len: self.slides.len(),
            });
        }
        if self.current_index != Some(index) {
            self.current_index = Some(index);
            self.render();
        }
        Ok(())
    }

    pub async fn move_right(&mut self) -> Result<Option<usize>, NavigationError> {
        self.move_towards(Direction::Right).await
    }

    pub async fn move_left(&mut self) -> Result<Option<usize>, NavigationError> {
        self.move_towards(Direction::Left).await
    }

    /// Moves one slide over. The index is committed before the neighborhood
    /// is loaded, so a [`NavigationError::Loader`] still means the move
    /// happened.
    async fn move_towards(
        &mut self,
        direction: Direction,
    ) -> Result<Option<usize>, NavigationError> {
        let next = self.track().next(self.current_index, direction)?;
        if next != self.current_index {
            debug!(
                "Moving {:?} from slide {:?} to slide {:?}",
                direction, self.current_index, next
            );
            self.current_index = next;
            self.render();
        }
        if let Some(index) = next {
            self.process_neighborhood(index).await?;
        }
        Ok(next)
    }

    pub async fn process_current_neighborhood(&mut self) -> Result<(), NavigationError> {
        match self.current_index {
            Some(index) => self.process_neighborhood(index).await,
            None => Ok(()),
        }
    }

    /// Reloads every slide within the neighbor radius of `index`. The
    /// sequence is left untouched unless all loads succeed.
    pub async fn process_neighborhood(&mut self, index: usize) -> Result<(), NavigationError> {
        if self.slides.is_empty() {
            return Ok(());
        }
        let indices = neighbor_indices(index, self.settings.neighbors, self.slides.len());
        let loaded = load_neighborhood(&self.slides, &indices, &self.loader)
            .await
            .map_err(NavigationError::Loader)?;
        for (index, item) in loaded {
            self.slides[index] = item;
        }
        Ok(())
    }

    pub fn is_auto_advancing(&self) -> bool {
        matches!(self.playback, Playback::AutoPlaying { .. })
    }

    /// Starts or stops the auto-advance timer. Starting a running timer, or
    /// stopping a stopped one, does nothing.
    pub fn set_auto_advance(&mut self, enabled: bool) {
        match (enabled, self.playback) {
            (true, Playback::Idle) => {
                debug!("Starting auto-advance every {:?}", self.settings.slide_duration);
                self.playback = Playback::AutoPlaying {
                    time_elapsed: Duration::default(),
                };
            }
            (false, Playback::AutoPlaying { .. }) => {
                debug!("Stopping auto-advance");
                self.playback = Playback::Idle;
            }
            _ => return,
        }
        self.settings.auto_advance = enabled;
        self.observer.on_auto_advance_change(enabled);
    }

    pub fn toggle_auto_advance(&mut self) {
        self.set_auto_advance(!self.is_auto_advancing());
    }

    /// Advances the auto-advance timer by `dt` and moves right once per
    /// elapsed slide duration. Returns how many times the index changed.
    pub async fn tick(&mut self, dt: Duration) -> usize {
        match &mut self.playback {
            Playback::AutoPlaying { time_elapsed } => *time_elapsed += dt,
            Playback::Idle => return 0,
        }

        let mut moves = 0;
        while self.take_elapsed_period() {
            let before = self.current_index;
            if let Err(e) = self.move_right().await {
                warn!("Automatic slide change failed: {}", e);
            }
            if self.current_index != before {
                moves += 1;
            }
        }
        moves
    }

    fn take_elapsed_period(&mut self) -> bool {
        let period = self.settings.slide_duration;
        match &mut self.playback {
            Playback::AutoPlaying { time_elapsed } if *time_elapsed >= period => {
                *time_elapsed -= period;
                true
            }
            _ => false,
        }
    }

    /// Applies a key press. Errors are logged and swallowed here since a key
    /// press has nobody to report them to.
    pub async fn handle_key(&mut self, code: &str) -> KeyOutcome {
        if !self.settings.keyboard_enabled {
            return KeyOutcome::Ignored;
        }
        let control = match Control::from_key_code(code) {
            Some(control) => control,
            None => return KeyOutcome::Ignored,
        };

        if control.is_directional() {
            self.set_auto_advance(false);
        }
        let result = match control {
            Control::Right => self.move_right().await.map(|_| ()),
            Control::Left => self.move_left().await.map(|_| ()),
            Control::Space => {
                self.toggle_auto_advance();
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!("Slide control {:?} failed: {}", control, e);
        }

        if let Some(index) = self.current_index {
            if let Some(item) = self.slides.get(index) {
                self.observer.on_slide_change(item);
            }
        }
        KeyOutcome::Handled
    }

    fn track(&self) -> Track {
        Track {
            len: self.slides.len(),
            loop_index: self.settings.loop_index,
            skip_index: self.settings.skip_index,
        }
    }

    /// Asks the observer to draw the current slide.
    pub fn render(&mut self) {
        let len = self.slides.len();
        if let Some(index) = self.current_index {
            if let Some(item) = self.slides.get(index) {
                self.observer.on_render(SlideView {
                    item,
                    index,
                    len,
                    is_last: index + 1 == len,
                });
            }
        }
    }
}

fn validate(settings: &Settings, len: usize) -> Result<(), NavigationError> {
    if settings.slide_duration == Duration::default() {
        return Err(NavigationError::InvalidSettings(
            "slide duration must be longer than zero",
        ));
    }
    if len > 0 && settings.loop_index >= len {
        return Err(NavigationError::OutOfRange {
            index: settings.loop_index,
            len,
        });
    }
    Ok(())
}
