//! Internal Diesel row structs for database reads.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversion into [`VoterRecord`] validates
//! the stored gender literal; a row that fails conversion indicates a corrupt
//! roll load, not a bad request.

use diesel::prelude::*;

use crate::domain::{AreaCode, Gender, VoterRecord, VoterValidationError};

use super::schema::voters;

/// Row struct for reading from the voters table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = voters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct VoterRow {
    #[expect(dead_code, reason = "surrogate key is never surfaced to the domain")]
    pub id: i64,
    pub serial_no: String,
    pub voter_no: String,
    pub name: String,
    pub father: String,
    pub mother: String,
    pub gender: String,
    pub date_of_birth: String,
    pub area_code: i32,
    pub profession: Option<String>,
    pub address: Option<String>,
    pub area_name: Option<String>,
    pub district: Option<String>,
    pub upazila: Option<String>,
    pub city_corp: Option<String>,
    pub ward_union: Option<String>,
    pub union_ward: Option<String>,
    pub post_office: Option<String>,
    pub postcode: Option<String>,
    pub region: Option<String>,
    pub polling_center: Option<String>,
}

impl TryFrom<VoterRow> for VoterRecord {
    type Error = VoterValidationError;

    fn try_from(row: VoterRow) -> Result<Self, Self::Error> {
        let gender = Gender::parse(&row.gender)?;
        Ok(Self {
            serial_no: row.serial_no,
            voter_no: row.voter_no,
            name: row.name,
            father: row.father,
            mother: row.mother,
            gender,
            date_of_birth: row.date_of_birth,
            area_code: AreaCode::from_i32(row.area_code),
            profession: row.profession,
            address: row.address,
            area_name: row.area_name,
            district: row.district,
            upazila: row.upazila,
            city_corp: row.city_corp,
            ward_union: row.ward_union,
            union_ward: row.union_ward,
            post_office: row.post_office,
            postcode: row.postcode,
            region: row.region,
            polling_center: row.polling_center,
        })
    }
}
