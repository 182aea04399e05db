use serde::{Deserialize, Serialize};

use kernel::prelude::collection::Directory;
use kernel::prelude::entity::{
    DestructMember, Member, MemberAddress, MemberName, MemberPhone, MembershipNumber,
};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(in crate::storage) struct MemberRow {
    membership_number: MembershipNumber,
    #[serde(default)]
    name: Option<MemberName>,
    phone: MemberPhone,
    #[serde(default)]
    address: Option<MemberAddress>,
}

impl From<Member> for MemberRow {
    fn from(value: Member) -> Self {
        let DestructMember {
            membership_number,
            name,
            phone,
            address,
        } = value.into_destruct();
        Self {
            membership_number,
            name: Some(name),
            phone,
            address: Some(address),
        }
    }
}

pub(in crate::storage) fn directory_from_rows(rows: Vec<MemberRow>) -> Directory {
    let mut directory = Directory::new();
    for row in rows {
        let membership_number = row.membership_number.clone();
        if let Err(report) = directory.add_member(
            row.membership_number,
            row.name.unwrap_or_default(),
            row.phone,
            row.address.unwrap_or_default(),
        ) {
            tracing::warn!(%membership_number, error = ?report, "Skipping repeated member entry");
        }
    }
    directory
}
