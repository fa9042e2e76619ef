use crate::domain::{MappedRecord, RawRecord};

/// Output header, in column order
pub const COLUMNS: [&str; 8] = [
    "JOBSITE",
    "AGENCY",
    "PRINCIPAL",
    "JO CLASS",
    "POSITION",
    "JO BALANCE",
    "DATE APPROVED",
    "DATA AS OF",
];

/// Renames the API's keys onto the output schema
pub fn map_record(record: &RawRecord) -> MappedRecord {
    MappedRecord {
        job_site: record.field("JOBSITE"),
        agency: record.field("AGENCY"),
        principal: record.field("PRINCIPALNAME"),
        jo_class: record.field("AccreditationClass"),
        position: record.field("POSITION"),
        jo_balance: record.field("JOBALANCE"),
        date_approved: record.field("DATEAPPROVED"),
        data_as_of: record.field("DATAASOF"),
    }
}
