use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_owners_table::Migration),
            Box::new(m20240101_000002_create_accounts_table::Migration),
        ]
    }
}

mod m20240101_000001_create_owners_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_owners_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Owners::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Owners::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Owners::Name).string().not_null())
                        .col(ColumnDef::new(Owners::Email).string().not_null())
                        .col(ColumnDef::new(Owners::Birthdate).date().not_null())
                        .to_owned(),
                )
                .await?;

            // name and email are lookup keys but not unique
            manager
                .create_index(
                    Index::create()
                        .name("idx_owners_name")
                        .table(Owners::Table)
                        .col(Owners::Name)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_owners_email")
                        .table(Owners::Table)
                        .col(Owners::Email)
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Owners::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Owners {
        Table,
        Id,
        Name,
        Email,
        Birthdate,
    }
}

mod m20240101_000002_create_accounts_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_accounts_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // No foreign key on owner_id: owners are deleted without touching their accounts
            manager
                .create_table(
                    Table::create()
                        .table(Accounts::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Accounts::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Accounts::Iban).string().not_null())
                        .col(ColumnDef::new(Accounts::Balance).double().not_null())
                        .col(ColumnDef::new(Accounts::OwnerId).uuid().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_accounts_iban")
                        .table(Accounts::Table)
                        .col(Accounts::Iban)
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_accounts_owner_id")
                        .table(Accounts::Table)
                        .col(Accounts::OwnerId)
                        .if_not_exists()
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Accounts::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Accounts {
        Table,
        Id,
        Iban,
        Balance,
        OwnerId,
    }
}
