use super::*;

#[test]
fn default_is_idle() {
    let state: RemoteData<Vec<i32>> = RemoteData::default();
    assert_eq!(state, RemoteData::Idle);
    assert!(!state.is_loading());
    assert!(state.data().is_none());
    assert!(state.error().is_none());
}

#[test]
fn from_result_folds_ok_and_err() {
    let loaded = RemoteData::from_result(Ok(vec![1, 2]));
    assert_eq!(loaded.data(), Some(&vec![1, 2]));

    let errored: RemoteData<Vec<i32>> = RemoteData::from_result(Err(ApiError::Unauthorized));
    assert_eq!(errored.error(), Some("Your session has expired. Please log in again."));
}

#[test]
fn from_result_uses_friendly_translation() {
    let errored: RemoteData<()> =
        RemoteData::from_result(Err(ApiError::from_status(400, "Insufficient balance".to_owned())));
    assert_eq!(errored.error(), Some("Insufficient balance in your account."));
}

#[test]
fn update_loaded_only_touches_loaded_state() {
    let mut loaded = RemoteData::Loaded(vec![1]);
    loaded.update_loaded(|v| v.push(2));
    assert_eq!(loaded.data(), Some(&vec![1, 2]));

    let mut loading: RemoteData<Vec<i32>> = RemoteData::Loading;
    loading.update_loaded(|v| v.push(9));
    assert!(loading.is_loading());
}
