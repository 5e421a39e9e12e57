//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the loaded electoral roll exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When the roll loader changes column layout, regenerate this
//! file with `diesel print-schema`.

diesel::table! {
    /// Electoral roll table, one row per registered voter.
    ///
    /// The roll is append-only and loaded out of band; this service only
    /// reads it. `voter_no` is unique within an `area_code`, not globally.
    voters (id) {
        /// Surrogate primary key assigned by the loader.
        id -> Int8,
        /// Serial number within the source roll page.
        serial_no -> Varchar,
        /// Voter number, unique within an area.
        voter_no -> Varchar,
        /// Voter name as printed on the roll.
        name -> Varchar,
        /// Father's name.
        father -> Varchar,
        /// Mother's name.
        mother -> Varchar,
        /// Gender literal as stored in the source dataset.
        gender -> Varchar,
        /// Date of birth, stored as the roll's display string.
        date_of_birth -> Varchar,
        /// Electoral area code.
        area_code -> Int4,
        /// Declared profession, when present on the roll.
        profession -> Nullable<Varchar>,
        /// Residential address.
        address -> Nullable<Varchar>,
        /// Human-readable area name.
        area_name -> Nullable<Varchar>,
        /// District name.
        district -> Nullable<Varchar>,
        /// Upazila (sub-district) name.
        upazila -> Nullable<Varchar>,
        /// City corporation, when the area falls under one.
        city_corp -> Nullable<Varchar>,
        /// Ward or union name.
        ward_union -> Nullable<Varchar>,
        /// Union or ward number.
        union_ward -> Nullable<Varchar>,
        /// Post office name.
        post_office -> Nullable<Varchar>,
        /// Postal code.
        postcode -> Nullable<Varchar>,
        /// Administrative region.
        region -> Nullable<Varchar>,
        /// Assigned polling centre.
        polling_center -> Nullable<Varchar>,
    }
}
