//! [`Command`] for changing a status of a [`Stateful`] entity.

use common::operations::{By, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::Stateful,
    filter::Filterable,
    infra::{api, Api},
    view::List,
    Console,
};

use super::Command;

/// [`Command`] for changing a status of a [`Stateful`] entity listed in a
/// [`List`] view.
///
/// The entity is patched in the [`List`] only once the [`Api`] accepts the
/// change. If the entity is listed, the change must be allowed by
/// [`Stateful::can_transition()`], otherwise nothing is sent.
#[derive(Debug)]
pub struct TransitionStatus<'v, T: Filterable + Stateful> {
    /// [`List`] view the entity is listed in.
    pub view: &'v mut List<T>,

    /// ID of the entity to change the status of.
    pub id: T::Id,

    /// New status of the entity.
    pub status: T::Status,
}

impl<'v, A, T> Command<TransitionStatus<'v, T>> for Console<A>
where
    A: Api<Update<By<T, (T::Id, T::Status)>>, Err = Traced<api::Error>>,
    T: Filterable + Stateful,
{
    type Ok = <A as Api<Update<By<T, (T::Id, T::Status)>>>>::Ok;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: TransitionStatus<'v, T>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let TransitionStatus { view, id, status } = cmd;

        if let Some(current) = view.get(id).map(Stateful::status) {
            if !T::can_transition(current, status) {
                return Err(tracerr::new!(E::Forbidden {
                    from: current.to_string(),
                    to: status.to_string(),
                }));
            }
        }

        let resp = self
            .api()
            .execute(Update(By::new((id, status))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        if !view.patch_status(id, status) {
            log::debug!("`{id}` is not listed, nothing to patch");
        }
        Ok(resp)
    }
}

/// Error of [`TransitionStatus`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// Status change is not allowed.
    #[display("status cannot be changed from `{from}` to `{to}`")]
    #[from(ignore)]
    Forbidden {
        /// Current status.
        from: String,

        /// Requested status.
        to: String,
    },
}

#[cfg(test)]
mod spec {
    use common::DateOf;

    use crate::{
        domain::{booking, hotel, rental, Booking, Hotel, Rental},
        infra::api::mock::Mock,
        view::List,
        Command as _, Console,
    };

    use super::{ExecutionError, TransitionStatus};

    fn booking(id: i64) -> Booking {
        Booking {
            id: id.into(),
            hotel_name: Some("Sea View".into()),
            room_names: vec!["101".into()],
            guest_name: Some("Tran Van An".into()),
            guest_email: Some("an@mail.vn".into()),
            check_in: Some(DateOf::from_iso("2024-10-01").unwrap()),
            check_out: Some(DateOf::from_iso("2024-10-03").unwrap()),
            total_price: None,
            deposit_amount: None,
            payment_method: None,
            payment_date: None,
            status: booking::Status::Pending,
        }
    }

    fn hotel(id: i64, status: hotel::Status) -> Hotel {
        Hotel {
            id: id.into(),
            name: format!("Hotel {id}").into(),
            email: None,
            phone: None,
            description: None,
            street: None,
            province: None,
            district: None,
            ward: None,
            facilities: vec![],
            status,
        }
    }

    fn bookings() -> Vec<Booking> {
        vec![booking(6), booking(7), booking(8)]
    }

    fn statuses(view: &List<Booking>) -> Vec<booking::Status> {
        view.visible().map(|b| b.status).collect()
    }

    #[tokio::test]
    async fn patches_confirmed_booking() {
        let console = Console::new(Mock {
            bookings: bookings(),
            ..Mock::default()
        });
        let mut view = List::new();
        view.replace(bookings());

        let updated = console
            .execute(TransitionStatus {
                view: &mut view,
                id: booking::Id::from(7),
                status: booking::Status::Confirmed,
            })
            .await
            .unwrap();

        assert_eq!(updated.status, booking::Status::Confirmed);
        assert_eq!(
            statuses(&view),
            [
                booking::Status::Pending,
                booking::Status::Confirmed,
                booking::Status::Pending,
            ],
        );
        let patched = view.get(7.into()).unwrap();
        assert_eq!(patched.guest_email, Some("an@mail.vn".into()));
        assert_eq!(patched.room_names, vec![booking::RoomName::from("101")]);
    }

    #[tokio::test]
    async fn failure_leaves_view_untouched() {
        let console = Console::new(
            Mock {
                bookings: bookings(),
                ..Mock::default()
            }
            .failing(500),
        );
        let mut view = List::new();
        view.replace(bookings());
        let revision = view.revision();

        let err = console
            .execute(TransitionStatus {
                view: &mut view,
                id: booking::Id::from(7),
                status: booking::Status::Cancelled,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Api(_)));
        assert!(statuses(&view)
            .into_iter()
            .all(|s| s == booking::Status::Pending));
        assert_eq!(view.revision(), revision);
    }

    #[tokio::test]
    async fn rejects_decided_hotel_locally() {
        let hotels = vec![hotel(1, hotel::Status::Approved)];
        let console = Console::new(Mock {
            hotels: hotels.clone(),
            ..Mock::default()
        });
        let mut view = List::new();
        view.replace(hotels);

        let err = console
            .execute(TransitionStatus {
                view: &mut view,
                id: hotel::Id::from(1),
                status: hotel::Status::Rejected,
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Forbidden { .. }));
        assert_eq!(console.api().calls(), 0);
        assert_eq!(view.get(1.into()).unwrap().status, hotel::Status::Approved);
    }

    #[tokio::test]
    async fn approves_pending_hotel() {
        let hotels = vec![
            hotel(1, hotel::Status::Pending),
            hotel(2, hotel::Status::Pending),
        ];
        let console = Console::new(Mock {
            hotels: hotels.clone(),
            ..Mock::default()
        });
        let mut view = List::new();
        view.replace(hotels);
        _ = view.set_filter_str("status", "PENDING").unwrap();

        _ = console
            .execute(TransitionStatus {
                view: &mut view,
                id: hotel::Id::from(2),
                status: hotel::Status::Approved,
            })
            .await
            .unwrap();

        let visible: Vec<i64> = view.visible().map(|h| h.id.into()).collect();
        assert_eq!(visible, [1]);
        assert_eq!(view.raw().len(), 2);
    }

    #[tokio::test]
    async fn reports_rental_approval_message() {
        let rentals = vec![Rental {
            id: 3.into(),
            first_name: Some("Binh".into()),
            last_name: None,
            email: None,
            approval: rental::Approval::Pending,
        }];
        let console = Console::new(Mock {
            rentals: rentals.clone(),
            ..Mock::default()
        });
        let mut view = List::new();
        view.replace(rentals);

        let message = console
            .execute(TransitionStatus {
                view: &mut view,
                id: rental::Id::from(3),
                status: rental::Approval::Approved,
            })
            .await
            .unwrap();

        assert_eq!(message, "Rental 3 approved");
        assert_eq!(
            view.get(3.into()).unwrap().approval,
            rental::Approval::Approved,
        );
    }
}
