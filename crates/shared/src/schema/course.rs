use sea_query::Iden;

#[derive(Debug, Iden)]
pub enum Courses {
    Table,
    Id,
    Name,
    StartDatetime,
    EndDatetime,
    Status,
    CreatedAt,
}
