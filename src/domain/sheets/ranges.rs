// Ranges are hardcoded; both sheets share the Category/Title/Director layout

pub mod collection {
    pub const RO_ENTRIES: &str = "collection!A:C";
}

pub mod wantlist {
    pub const RO_ENTRIES: &str = "wantlist!A:C";
}
