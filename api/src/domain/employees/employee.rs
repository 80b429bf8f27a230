use mongodb::bson::oid::ObjectId;

/// Mutable part of an employee record. Every write replaces all three fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeFields {
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: ObjectId,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

impl Employee {
    pub fn from_fields(id: ObjectId, fields: EmployeeFields) -> Self {
        Self {
            id,
            name: fields.name,
            salary: fields.salary,
            age: fields.age,
        }
    }

    pub fn fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            salary: self.salary,
            age: self.age,
        }
    }
}

#[derive(thiserror::Error, Debug)]
#[error("invalid employee id `{raw}`")]
pub struct InvalidEmployeeId {
    pub raw: String,
    #[source]
    source: mongodb::bson::oid::Error,
}

pub fn parse_employee_id(raw: &str) -> Result<ObjectId, InvalidEmployeeId> {
    ObjectId::parse_str(raw).map_err(|source| InvalidEmployeeId {
        raw: raw.to_string(),
        source,
    })
}
