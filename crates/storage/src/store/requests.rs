#![forbid(unsafe_code)]

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateLineRequest {
    pub name: String,
    pub color: String,
    pub up_station_id: i64,
    pub down_station_id: i64,
    pub distance: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateLineRequest {
    pub line_id: i64,
    pub expected_revision: Option<i64>,
    pub name: String,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddSectionRequest {
    pub line_id: i64,
    pub expected_revision: Option<i64>,
    pub up_station_id: i64,
    pub down_station_id: i64,
    pub distance: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoveSectionRequest {
    pub line_id: i64,
    pub expected_revision: Option<i64>,
    pub station_id: i64,
}
