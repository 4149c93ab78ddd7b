// Written by hand rather than by `diesel print-schema`, which maps an SQLite
// `INTEGER PRIMARY KEY` to `Integer`. SQLite rowids are 64-bit, so `id` is
// declared `BigInt` to round-trip every `CustomerId`.

diesel::table! {
    customers (id) {
        id -> BigInt,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
    }
}
