/// What a renderer gets to see of the current slide.
#[derive(Debug)]
pub struct SlideView<'a, T> {
    pub item: &'a T,
    pub index: usize,
    pub len: usize,
    pub is_last: bool,
}

/// Receives navigator notifications. Every hook defaults to doing nothing.
pub trait SlideObserver<T> {
    /// Called once per change of the current index.
    fn on_render(&mut self, _view: SlideView<'_, T>) {}

    /// Called after each recognized key press that left a current slide.
    fn on_slide_change(&mut self, _item: &T) {}

    fn on_auto_advance_change(&mut self, _enabled: bool) {}
}

impl<T> SlideObserver<T> for () {}
