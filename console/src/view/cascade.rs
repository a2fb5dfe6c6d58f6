//! [`Cascade`] of location selections.

use derive_more::{Display, Error};
use tokio::sync::watch;
use tracing as log;

use crate::domain::{
    location::{Address, Id, Scope, Tier},
    Node,
};

/// Dependent selection of a province, its district and the district's ward,
/// along with the option lists backing each of them.
///
/// Changing a selection clears every dependent selection and option list
/// before anything is fetched, so options of a previous ancestor are never
/// exposed.
#[derive(Debug)]
pub struct Cascade {
    /// [`State`] of the provinces list.
    provinces: State,

    /// [`State`] of the districts list of the selected province.
    districts: State,

    /// [`State`] of the wards list of the selected district.
    wards: State,

    /// ID of the selected province.
    province: Option<Id>,

    /// ID of the selected district.
    district: Option<Id>,

    /// ID of the selected ward.
    ward: Option<Id>,

    /// Number of the last issued [`Fetch`].
    requests: u64,

    /// Revision of this [`Cascade`], bumped on every change.
    revision: watch::Sender<u64>,
}

/// State of a single [`Cascade`] level.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum State {
    /// Nothing requested.
    #[default]
    Idle,

    /// Options are being fetched by the provided [`Fetch`].
    Loading(Fetch),

    /// Options are fetched.
    Loaded(Vec<Node>),

    /// Options failed to be fetched with the provided message.
    Failed(String),
}

impl State {
    /// Returns the loaded options, if any.
    #[must_use]
    pub fn options(&self) -> &[Node] {
        match self {
            Self::Loaded(nodes) => nodes,
            Self::Idle | Self::Loading(_) | Self::Failed(_) => &[],
        }
    }
}

/// Ticket of a location [`Node`]s fetch issued by a [`Cascade`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Fetch {
    /// [`Scope`] to be fetched.
    scope: Scope,

    /// Number of the request, unique within its [`Cascade`].
    request: u64,
}

impl Fetch {
    /// Returns the [`Scope`] to be fetched.
    #[must_use]
    pub const fn scope(self) -> Scope {
        self.scope
    }
}

/// Error of resolving a [`Fetch`] which is no longer current.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display("`{_0:?}` is superseded")]
pub struct Stale(#[error(not(source))] pub Fetch);

impl Default for Cascade {
    fn default() -> Self {
        Self {
            provinces: State::Idle,
            districts: State::Idle,
            wards: State::Idle,
            province: None,
            district: None,
            ward: None,
            requests: 0,
            revision: watch::Sender::new(0),
        }
    }
}

impl Cascade {
    /// Creates a new [`Cascade`] with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts (re)loading the provinces list.
    pub fn load_provinces(&mut self) -> Fetch {
        let fetch = self.issue(Scope::Provinces);
        self.provinces = State::Loading(fetch);
        self.notify();
        fetch
    }

    /// Selects the province with the provided ID, clearing the district and
    /// ward selections along with their options.
    ///
    /// Returns the [`Fetch`] of the province's districts, if a province is
    /// selected.
    pub fn set_province(&mut self, id: Option<Id>) -> Option<Fetch> {
        self.province = id;
        self.district = None;
        self.ward = None;
        self.wards = State::Idle;
        let fetch = id.map(|id| self.issue(Scope::Districts(id)));
        self.districts = fetch.map_or(State::Idle, State::Loading);
        self.notify();
        fetch
    }

    /// Selects the district with the provided ID, clearing the ward selection
    /// along with its options.
    ///
    /// Returns the [`Fetch`] of the district's wards, if a district is
    /// selected.
    pub fn set_district(&mut self, id: Option<Id>) -> Option<Fetch> {
        self.district = id;
        self.ward = None;
        let fetch = id.map(|id| self.issue(Scope::Wards(id)));
        self.wards = fetch.map_or(State::Idle, State::Loading);
        self.notify();
        fetch
    }

    /// Selects the ward with the provided ID.
    pub fn set_ward(&mut self, id: Option<Id>) {
        if self.ward != id {
            self.ward = id;
            self.notify();
        }
    }

    /// Restores an existing selection at once, keeping the dependent
    /// selections instead of clearing them.
    ///
    /// A district is kept only along with its province, and a ward only
    /// along with its district.
    ///
    /// Returns the [`Fetch`]es of every level options to be shown, starting
    /// with the provinces.
    pub fn restore(
        &mut self,
        province: Option<Id>,
        district: Option<Id>,
        ward: Option<Id>,
    ) -> Vec<Fetch> {
        let district = province.and(district);
        let ward = district.and(ward);
        self.province = province;
        self.district = district;
        self.ward = ward;

        let provinces = self.issue(Scope::Provinces);
        self.provinces = State::Loading(provinces);
        let districts = province.map(|id| self.issue(Scope::Districts(id)));
        self.districts = districts.map_or(State::Idle, State::Loading);
        let wards = district.map(|id| self.issue(Scope::Wards(id)));
        self.wards = wards.map_or(State::Idle, State::Loading);
        self.notify();

        [Some(provinces), districts, wards]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Applies the `result` of the provided [`Fetch`] to its level.
    ///
    /// Fetched [`Node`]s not belonging to the fetched [`Scope`] are dropped.
    ///
    /// # Errors
    ///
    /// With [`Stale`] if the [`Fetch`] is superseded, leaving this [`Cascade`]
    /// untouched.
    pub fn resolve<E: Display>(
        &mut self,
        fetch: Fetch,
        result: Result<Vec<Node>, E>,
    ) -> Result<(), Stale> {
        let level = self.level_mut(fetch.scope.tier());
        if *level != State::Loading(fetch) {
            log::debug!("discarding response of superseded `{fetch:?}`");
            return Err(Stale(fetch));
        }

        *level = match result {
            Ok(mut nodes) => {
                let parent = fetch.scope.parent_id();
                nodes.retain(|n| n.parent_id == parent);
                State::Loaded(nodes)
            }
            Err(e) => {
                log::warn!("failed to fetch `{:?}`: {e}", fetch.scope);
                State::Failed(e.to_string())
            }
        };
        self.notify();
        Ok(())
    }

    /// Returns the [`State`] of the provided [`Tier`] level.
    #[must_use]
    pub const fn level(&self, tier: Tier) -> &State {
        match tier {
            Tier::Province => &self.provinces,
            Tier::District => &self.districts,
            Tier::Ward => &self.wards,
        }
    }

    /// Returns ID of the selected province, if any.
    #[must_use]
    pub const fn province(&self) -> Option<Id> {
        self.province
    }

    /// Returns ID of the selected district, if any.
    #[must_use]
    pub const fn district(&self) -> Option<Id> {
        self.district
    }

    /// Returns ID of the selected ward, if any.
    #[must_use]
    pub const fn ward(&self) -> Option<Id> {
        self.ward
    }

    /// Returns the complete [`Address`] selected, if every level is selected.
    #[must_use]
    pub fn selection(&self) -> Option<Address> {
        Some(Address {
            province_id: self.province?,
            district_id: self.district?,
            ward_id: self.ward?,
        })
    }

    /// Subscribes to the revisions of this [`Cascade`].
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Issues a new [`Fetch`] of the provided [`Scope`].
    fn issue(&mut self, scope: Scope) -> Fetch {
        self.requests += 1;
        Fetch {
            scope,
            request: self.requests,
        }
    }

    /// Returns the mutable [`State`] of the provided [`Tier`] level.
    fn level_mut(&mut self, tier: Tier) -> &mut State {
        match tier {
            Tier::Province => &mut self.provinces,
            Tier::District => &mut self.districts,
            Tier::Ward => &mut self.wards,
        }
    }

    /// Bumps the revision of this [`Cascade`].
    fn notify(&self) {
        self.revision.send_modify(|r| *r += 1);
    }
}

#[cfg(test)]
mod spec {
    use crate::domain::{
        location::{Id, Tier},
        Node,
    };

    use super::{Cascade, State};

    fn node(id: i64, parent: Option<i64>) -> Node {
        Node {
            id: id.into(),
            name: format!("Node {id}").into(),
            parent_id: parent.map(Into::into),
        }
    }

    fn ids(cascade: &Cascade, tier: Tier) -> Vec<i64> {
        cascade
            .level(tier)
            .options()
            .iter()
            .map(|n| n.id.into())
            .collect()
    }

    #[test]
    fn late_response_of_previous_province_is_discarded() {
        let mut cascade = Cascade::new();

        let p1 = cascade.set_province(Some(Id::from(1))).unwrap();
        let p2 = cascade.set_province(Some(Id::from(2))).unwrap();

        cascade
            .resolve(p2, Ok::<_, String>(vec![node(20, Some(2))]))
            .unwrap();
        assert!(cascade
            .resolve(p1, Ok::<_, String>(vec![node(10, Some(1))]))
            .is_err());

        assert_eq!(ids(&cascade, Tier::District), [20]);
        assert_eq!(cascade.province(), Some(Id::from(2)));
    }

    #[test]
    fn changing_province_clears_descendants_before_fetching() {
        let mut cascade = Cascade::new();
        let p = cascade.set_province(Some(Id::from(1))).unwrap();
        cascade
            .resolve(p, Ok::<_, String>(vec![node(10, Some(1))]))
            .unwrap();
        let d = cascade.set_district(Some(Id::from(10))).unwrap();
        cascade
            .resolve(d, Ok::<_, String>(vec![node(100, Some(10))]))
            .unwrap();
        cascade.set_ward(Some(Id::from(100)));

        assert!(cascade.selection().is_some());

        let next = cascade.set_province(Some(Id::from(2))).unwrap();

        assert_eq!(cascade.district(), None);
        assert_eq!(cascade.ward(), None);
        assert_eq!(cascade.level(Tier::District), &State::Loading(next));
        assert_eq!(cascade.level(Tier::Ward), &State::Idle);
        assert!(cascade.selection().is_none());
    }

    #[test]
    fn clearing_province_skips_fetch() {
        let mut cascade = Cascade::new();
        _ = cascade.set_province(Some(Id::from(1)));

        assert!(cascade.set_province(None).is_none());
        assert_eq!(cascade.level(Tier::District), &State::Idle);
    }

    #[test]
    fn failure_leaves_options_empty() {
        let mut cascade = Cascade::new();
        let p = cascade.set_province(Some(Id::from(1))).unwrap();

        cascade.resolve(p, Err::<Vec<Node>, _>("timed out")).unwrap();

        assert_eq!(
            cascade.level(Tier::District),
            &State::Failed("timed out".into()),
        );
        assert!(ids(&cascade, Tier::District).is_empty());
    }

    #[test]
    fn drops_nodes_of_other_parents() {
        let mut cascade = Cascade::new();
        let p = cascade.set_province(Some(Id::from(1))).unwrap();

        cascade
            .resolve(
                p,
                Ok::<_, String>(vec![node(10, Some(1)), node(30, Some(3))]),
            )
            .unwrap();

        assert_eq!(ids(&cascade, Tier::District), [10]);
    }

    #[test]
    fn restores_selection_without_clearing_descendants() {
        let mut cascade = Cascade::new();

        let fetches = cascade.restore(
            Some(Id::from(1)),
            Some(Id::from(10)),
            Some(Id::from(100)),
        );
        for (fetch, nodes) in fetches.into_iter().zip([
            vec![node(1, None), node(2, None)],
            vec![node(10, Some(1))],
            vec![node(100, Some(10))],
        ]) {
            cascade.resolve(fetch, Ok::<_, String>(nodes)).unwrap();
        }

        assert_eq!(ids(&cascade, Tier::Province), [1, 2]);
        assert_eq!(ids(&cascade, Tier::District), [10]);
        assert_eq!(ids(&cascade, Tier::Ward), [100]);
        assert_eq!(
            cascade.selection().map(|a| i64::from(a.ward_id)),
            Some(100),
        );
    }

    #[test]
    fn restores_ward_only_along_with_district() {
        let mut cascade = Cascade::new();

        let fetches =
            cascade.restore(Some(Id::from(1)), None, Some(Id::from(9)));

        assert_eq!(fetches.len(), 2);
        assert_eq!(cascade.ward(), None);
        assert_eq!(cascade.level(Tier::Ward), &State::Idle);
    }

    #[test]
    fn reloading_provinces_supersedes_previous_load() {
        let mut cascade = Cascade::new();
        let first = cascade.load_provinces();
        let second = cascade.load_provinces();

        assert!(cascade
            .resolve(first, Ok::<_, String>(vec![node(1, None)]))
            .is_err());
        cascade
            .resolve(second, Ok::<_, String>(vec![node(2, None)]))
            .unwrap();

        assert_eq!(ids(&cascade, Tier::Province), [2]);
    }
}
