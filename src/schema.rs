diesel::table! {
    library.songs (id) {
        id -> Int8,
        group -> Text,
        title -> Text,
        release_date -> Text,
        text -> Text,
        link -> Text,
    }
}
