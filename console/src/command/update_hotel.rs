//! [`Command`] for updating details of an existing [`Hotel`].

use common::operations::{By, Update};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{facility, hotel, Hotel},
    infra::{api, Api},
    view::Cascade,
    Console,
};

use super::{register_hotel::non_blank, Command};

/// [`Command`] for updating details of an existing [`Hotel`], located at the
/// complete selection of a location [`Cascade`].
///
/// The [`Cascade`] is expected to be restored from the [`Hotel`]'s current
/// location beforehand.
#[derive(Debug)]
pub struct UpdateHotel<'c> {
    /// [`Cascade`] the [`Hotel`] location is selected in.
    pub cascade: &'c Cascade,

    /// ID of the updated [`Hotel`].
    pub id: hotel::Id,

    /// New name of the [`Hotel`], as entered.
    pub name: String,

    /// New contact email of the [`Hotel`], as entered.
    pub email: Option<String>,

    /// New contact phone number of the [`Hotel`], as entered.
    pub phone: Option<String>,

    /// New description of the [`Hotel`], as entered.
    pub description: Option<String>,

    /// New street of the [`Hotel`], as entered.
    pub street: Option<String>,

    /// Names of the facilities the [`Hotel`] provides now.
    pub facilities: Vec<facility::Name>,
}

impl<'c, A> Command<UpdateHotel<'c>> for Console<A>
where
    A: Api<
        Update<By<Hotel, (hotel::Id, hotel::Edit)>>,
        Ok = (),
        Err = Traced<api::Error>,
    >,
{
    type Ok = ();
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: UpdateHotel<'c>,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let UpdateHotel {
            cascade,
            id,
            name,
            email,
            phone,
            description,
            street,
            facilities,
        } = cmd;

        let name = non_blank::<hotel::Name>(Some(name))
            .ok_or(E::EmptyName)
            .map_err(tracerr::wrap!())?;
        let address = cascade
            .selection()
            .ok_or(E::IncompleteLocation)
            .map_err(tracerr::wrap!())?;

        let edit = hotel::Edit {
            name,
            email: non_blank(email),
            phone: non_blank(phone),
            description: non_blank(description),
            street: non_blank(street),
            address,
            facilities,
        };
        self.api()
            .execute(Update(By::new((id, edit))))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;
        log::debug!("updated hotel `{id}`");

        Ok(())
    }
}

/// Error of [`UpdateHotel`] [`Command`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Api`] error.
    #[display("`Api` operation failed: {_0}")]
    Api(api::Error),

    /// [`hotel::Name`] is blank.
    #[display("hotel name is required")]
    #[from(ignore)]
    EmptyName,

    /// Province, district or ward is not selected.
    #[display("province, district and ward must be selected")]
    #[from(ignore)]
    IncompleteLocation,
}

#[cfg(test)]
mod spec {
    use std::collections::HashMap;

    use crate::{
        command::RestoreLocation,
        domain::{
            hotel,
            location::{self, Scope, Tier},
            Hotel, Node,
        },
        infra::api::mock::Mock,
        view::Cascade,
        Command as _, Console,
    };

    use super::{ExecutionError, UpdateHotel};

    fn node(id: i64, parent: Option<i64>) -> Node {
        Node {
            id: id.into(),
            name: format!("Node {id}").into(),
            parent_id: parent.map(Into::into),
        }
    }

    fn reference(id: i64) -> Option<location::Ref> {
        Some(location::Ref {
            id: id.into(),
            name: None,
        })
    }

    fn mock() -> Mock {
        Mock {
            nodes: HashMap::from([
                (Scope::Provinces, vec![node(1, None)]),
                (Scope::Districts(1.into()), vec![node(10, Some(1))]),
                (
                    Scope::Wards(10.into()),
                    vec![node(100, Some(10)), node(101, Some(10))],
                ),
            ]),
            hotels: vec![Hotel {
                id: 5.into(),
                name: "Sea View".into(),
                email: None,
                phone: Some("0900000000".into()),
                description: None,
                street: None,
                province: reference(1),
                district: reference(10),
                ward: reference(100),
                facilities: vec!["Pool".into()],
                status: hotel::Status::Approved,
            }],
            ..Mock::default()
        }
    }

    fn form<'a>(cascade: &'a Cascade, name: &str) -> UpdateHotel<'a> {
        UpdateHotel {
            cascade,
            id: 5.into(),
            name: name.into(),
            email: Some(" ".into()),
            phone: Some("0911111111".into()),
            description: None,
            street: Some(" 2 Tran Phu ".into()),
            facilities: vec!["Pool".into(), "Gym".into()],
        }
    }

    #[tokio::test]
    async fn updates_hotel_at_restored_location() {
        let console = Console::new(mock());
        let mut cascade = Cascade::new();
        console
            .execute(RestoreLocation {
                cascade: &mut cascade,
                province: Some(1.into()),
                district: Some(10.into()),
                ward: Some(100.into()),
            })
            .await
            .unwrap();
        cascade.set_ward(Some(101.into()));
        assert_eq!(cascade.level(Tier::Ward).options().len(), 2);

        console.execute(form(&cascade, "Sea View II")).await.unwrap();

        let edits = console.api().edits.borrow();
        let (id, edit) = edits.first().unwrap();
        assert_eq!(*id, 5.into());
        assert_eq!(edit.name, "Sea View II".into());
        assert_eq!(edit.email, None);
        assert_eq!(edit.street, Some("2 Tran Phu".into()));
        assert_eq!(
            edit.address,
            location::Address {
                province_id: 1.into(),
                district_id: 10.into(),
                ward_id: 101.into(),
            },
        );
        assert_eq!(edit.facilities.len(), 2);
    }

    #[tokio::test]
    async fn requires_name_and_complete_location() {
        let console = Console::new(mock());
        let mut cascade = Cascade::new();
        _ = cascade.restore(Some(1.into()), Some(10.into()), Some(100.into()));

        let err = console.execute(form(&cascade, " ")).await.unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::EmptyName));

        cascade.set_ward(None);
        let err = console.execute(form(&cascade, "Hill")).await.unwrap_err();
        assert!(matches!(err.as_ref(), ExecutionError::IncompleteLocation));

        assert_eq!(console.api().calls(), 0);
    }

    #[tokio::test]
    async fn surfaces_rejection_of_unknown_hotel() {
        let console = Console::new(Mock::default());
        let mut cascade = Cascade::new();
        _ = cascade.restore(Some(1.into()), Some(10.into()), Some(100.into()));

        let err = console.execute(form(&cascade, "Hill")).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Api(_)));
    }
}
