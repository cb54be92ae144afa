pub(crate) fn simple_type_name<T>() -> &'static str {
    let type_name = core::any::type_name::<T>();
    match type_name.rfind(':') {
        Some(idx) => &type_name[idx + 1..],
        None => type_name,
    }
}
