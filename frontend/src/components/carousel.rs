use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

pub enum CarouselAction {
    Tick,
    Next,
    Prev,
    GoTo(usize),
    HoverStart,
    HoverEnd,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    auto_play: bool,
    hovered: bool,
}

impl CarouselState {
    pub fn new(len: usize, auto_play: bool) -> Self {
        Self {
            len,
            current: 0,
            auto_play,
            hovered: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether the auto-advance timer should be ticking.
    pub fn is_running(&self) -> bool {
        self.auto_play && !self.hovered && self.len > 1
    }

    /// `(previous, current, next)` indices, wrapping at both ends.
    pub fn visible(&self) -> Option<(usize, usize, usize)> {
        if self.len == 0 {
            return None;
        }
        let prev = (self.current + self.len - 1) % self.len;
        let next = (self.current + 1) % self.len;
        Some((prev, self.current, next))
    }

    pub fn apply(&mut self, action: CarouselAction) {
        if self.len == 0 {
            return;
        }
        match action {
            CarouselAction::Tick => {
                if self.is_running() {
                    self.current = (self.current + 1) % self.len;
                }
            }
            CarouselAction::Next => {
                self.auto_play = false;
                self.current = (self.current + 1) % self.len;
            }
            CarouselAction::Prev => {
                self.auto_play = false;
                self.current = (self.current + self.len - 1) % self.len;
            }
            CarouselAction::GoTo(index) => {
                self.auto_play = false;
                self.current = index % self.len;
            }
            CarouselAction::HoverStart => self.hovered = true,
            CarouselAction::HoverEnd => self.hovered = false,
        }
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Carousel over `len` slides. With `auto_play_ms` set, an interval advances
/// the slides until the user navigates manually; hovering pauses it.
#[hook]
pub fn use_carousel(len: usize, auto_play_ms: Option<u32>) -> UseReducerHandle<CarouselState> {
    let state = use_reducer(|| CarouselState::new(len, auto_play_ms.is_some()));
    let running = state.is_running();

    {
        let state = state.clone();
        use_effect_with_deps(
            move |running| {
                let interval = match (*running, auto_play_ms) {
                    (true, Some(ms)) => Some(Interval::new(ms, move || state.dispatch(CarouselAction::Tick))),
                    _ => None,
                };
                move || drop(interval)
            },
            running,
        );
    }

    state
}

#[derive(Properties, PartialEq)]
pub struct CarouselDotsProps {
    pub len: usize,
    pub current: usize,
    pub label: String,
    pub on_select: Callback<usize>,
}

#[function_component(CarouselDots)]
pub fn carousel_dots(props: &CarouselDotsProps) -> Html {
    html! {
        <div class="carousel-dots">
            { for (0..props.len).map(|i| {
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class={classes!("carousel-dot", (i == props.current).then(|| "active"))}
                        aria-label={format!("{} {}", props.label, i + 1)}
                        onclick={Callback::from(move |_| on_select.emit(i))}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wraps_in_both_directions() {
        let mut state = CarouselState::new(3, false);
        state.apply(CarouselAction::Prev);
        assert_eq!(state.current(), 2);
        state.apply(CarouselAction::Next);
        assert_eq!(state.current(), 0);
        assert_eq!(state.visible(), Some((2, 0, 1)));
    }

    #[test]
    fn go_to_wraps_out_of_range_index() {
        let mut state = CarouselState::new(4, false);
        state.apply(CarouselAction::GoTo(6));
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn tick_advances_only_while_running() {
        let mut state = CarouselState::new(3, true);
        state.apply(CarouselAction::Tick);
        assert_eq!(state.current(), 1);

        state.apply(CarouselAction::HoverStart);
        assert!(!state.is_running());
        state.apply(CarouselAction::Tick);
        assert_eq!(state.current(), 1);

        state.apply(CarouselAction::HoverEnd);
        state.apply(CarouselAction::Tick);
        assert_eq!(state.current(), 2);
    }

    #[test]
    fn manual_navigation_stops_auto_play() {
        let mut state = CarouselState::new(3, true);
        state.apply(CarouselAction::Next);
        assert!(!state.is_running());
        state.apply(CarouselAction::Tick);
        assert_eq!(state.current(), 1);
    }

    #[test]
    fn manual_carousel_never_ticks() {
        let mut state = CarouselState::new(3, false);
        state.apply(CarouselAction::Tick);
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn empty_and_single_slide_edge_cases() {
        let mut empty = CarouselState::new(0, true);
        empty.apply(CarouselAction::Next);
        assert_eq!(empty.visible(), None);
        assert!(!empty.is_running());

        let single = CarouselState::new(1, true);
        assert_eq!(single.visible(), Some((0, 0, 0)));
        assert!(!single.is_running());
    }
}
