//! Reducer composition utilities
//!
//! This module provides the two composition rules a combined store is built
//! from:
//! - **`combine_reducers`**: run multiple reducers on the same state/action
//! - **`scope_reducer`**: focus a slice reducer on one field of a larger state
//!
//! A root reducer for a multi-slice store is the combination of each slice
//! reducer scoped onto its own field. Every dispatched action is broadcast to
//! every slice reducer; routing happens only inside each reducer's `match`,
//! whose unmatched case is a required explicit "unchanged" return.
//!
//! # Examples
//!
//! ```
//! use slice_store_core::reducer::Reducer;
//! use slice_store_core::composition::{combine_reducers, scope_reducer};
//!
//! #[derive(Clone, Default)]
//! struct WalletState {
//!     cents: i64,
//! }
//!
//! #[derive(Clone, Default)]
//! struct ProfileState {
//!     name: String,
//! }
//!
//! #[derive(Clone, Default)]
//! struct AppState {
//!     wallet: WalletState,
//!     profile: ProfileState,
//! }
//!
//! #[derive(Clone)]
//! enum AppAction {
//!     Credit(i64),
//!     Rename(String),
//! }
//!
//! struct WalletReducer;
//! struct ProfileReducer;
//!
//! impl Reducer for WalletReducer {
//!     type State = WalletState;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut WalletState, action: AppAction, _env: &()) {
//!         match action {
//!             AppAction::Credit(amount) => state.cents += amount,
//!             _ => {}
//!         }
//!     }
//! }
//!
//! impl Reducer for ProfileReducer {
//!     type State = ProfileState;
//!     type Action = AppAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut ProfileState, action: AppAction, _env: &()) {
//!         match action {
//!             AppAction::Rename(name) => state.name = name,
//!             _ => {}
//!         }
//!     }
//! }
//!
//! let root = combine_reducers(vec![
//!     Box::new(scope_reducer(
//!         WalletReducer,
//!         |app: &AppState| &app.wallet,
//!         |app: &mut AppState, wallet| app.wallet = wallet,
//!     )),
//!     Box::new(scope_reducer(
//!         ProfileReducer,
//!         |app: &AppState| &app.profile,
//!         |app: &mut AppState, profile| app.profile = profile,
//!     )),
//! ]);
//!
//! let mut state = AppState::default();
//! root.reduce(&mut state, AppAction::Credit(500), &());
//! assert_eq!(state.wallet.cents, 500);
//! ```

use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence against the same state, receiving a clone
/// of the action. This is the broadcast rule: every combined reducer sees
/// every action, and each one ignores the actions it does not recognize.
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone(), env);
        }
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// This allows a reducer written against a single slice to participate in a
/// combined state: the slice is extracted, reduced, and written back.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The slice state type (subset of `S`)
/// - `A`: The action type
/// - `E`: The environment type
///
/// # Examples
///
/// ```
/// use slice_store_core::reducer::Reducer;
/// use slice_store_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct CounterState {
///     count: i32,
/// }
///
/// #[derive(Clone)]
/// enum CounterAction {
///     Increment,
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = CounterState;
///     type Action = CounterAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
///         match action {
///             CounterAction::Increment => state.count += 1,
///         }
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     counter: CounterState,
///     other_data: String,
/// }
///
/// let scoped = scope_reducer(
///     CounterReducer,
///     |app_state: &AppState| &app_state.counter,
///     |app_state: &mut AppState, counter: CounterState| {
///         app_state.counter = counter;
///     },
/// );
///
/// let mut state = AppState::default();
/// scoped.reduce(&mut state, CounterAction::Increment, &());
/// assert_eq!(state.counter.count, 1);
/// ```
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        // Extract the slice, reduce a copy, write it back
        let mut slice = (self.get_state)(state).clone();

        self.reducer.reduce(&mut slice, action, env);

        (self.set_state)(state, slice);
    }
}
