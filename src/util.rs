use enum_map::Enum;

pub fn enum_iter<E>() -> impl Iterator<Item = E> + Clone
where
    E: Enum,
{
    (0..E::LENGTH).map(|i| E::from_usize(i))
}
