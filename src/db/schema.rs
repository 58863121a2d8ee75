table! {
    profiles (id) {
        id -> Uuid,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        display_name -> Varchar,
        email -> Varchar,
        phone -> Nullable<Varchar>,
        role -> Int2,
        referral_code -> Varchar,
        referred_by -> Nullable<Varchar>,
        balance -> Numeric,
        btcwallet_balance -> Numeric,
        btcwallet_address -> Nullable<Varchar>,
        ethwallet_balance -> Numeric,
        ethwallet_address -> Nullable<Varchar>,
        usdtwallet_balance -> Numeric,
        usdtwallet_address -> Nullable<Varchar>,
        bnbwallet_balance -> Numeric,
        bnbwallet_address -> Nullable<Varchar>,
        xrpwallet_balance -> Numeric,
        xrpwallet_address -> Nullable<Varchar>,
        adawallet_balance -> Numeric,
        adawallet_address -> Nullable<Varchar>,
        solwallet_balance -> Numeric,
        solwallet_address -> Nullable<Varchar>,
        dogewallet_balance -> Numeric,
        dogewallet_address -> Nullable<Varchar>,
        ltcwallet_balance -> Numeric,
        ltcwallet_address -> Nullable<Varchar>,
        trxwallet_balance -> Numeric,
        trxwallet_address -> Nullable<Varchar>,
    }
}

table! {
    secret_phrases (id) {
        id -> Uuid,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        user_id -> Uuid,
        phrase -> Varchar,
    }
}

table! {
    transactions (id) {
        id -> Uuid,
        created_at -> Timestamp,
        updated_at -> Timestamp,
        user_id -> Uuid,
        kind -> Int2,
        symbol -> Varchar,
        amount -> Numeric,
        state -> Int2,
        reference -> Varchar,
    }
}

joinable!(secret_phrases -> profiles (user_id));
joinable!(transactions -> profiles (user_id));

allow_tables_to_appear_in_same_query!(
    profiles,
    secret_phrases,
    transactions,
);
