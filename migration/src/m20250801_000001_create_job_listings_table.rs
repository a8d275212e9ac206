use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobListings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobListings::JobId)
                            .string()
                            .not_null()
                            .primary_key(), // Provider-issued listing id, used for dedup
                    )
                    .col(ColumnDef::new(JobListings::SearchTerm).string().not_null())
                    .col(ColumnDef::new(JobListings::Title).string().not_null())
                    .col(ColumnDef::new(JobListings::CompanyName).string().not_null())
                    .col(ColumnDef::new(JobListings::Location).string())
                    .col(ColumnDef::new(JobListings::Description).text().not_null())
                    .col(ColumnDef::new(JobListings::Qualifications).text())
                    .col(ColumnDef::new(JobListings::Responsibilities).text())
                    .col(ColumnDef::new(JobListings::Benefits).text())
                    .col(ColumnDef::new(JobListings::Items).text())
                    .col(ColumnDef::new(JobListings::Via).string().not_null())
                    .col(ColumnDef::new(JobListings::PostedAt).string())
                    .col(ColumnDef::new(JobListings::ScheduleType).string())
                    .col(ColumnDef::new(JobListings::WorkFromHome).boolean())
                    .col(ColumnDef::new(JobListings::Salary).string())
                    .col(ColumnDef::new(JobListings::DatePosted).date())
                    .col(ColumnDef::new(JobListings::DateScraped).date().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobListings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobListings {
    Table,
    JobId,
    SearchTerm,
    Title,
    CompanyName,
    Location,
    Description,
    Qualifications,
    Responsibilities,
    Benefits,
    Items,
    Via,
    PostedAt,
    ScheduleType,
    WorkFromHome,
    Salary,
    DatePosted,
    DateScraped,
}
