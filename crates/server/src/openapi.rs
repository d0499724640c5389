use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorEnvelopeDoc { pub success: bool, pub message: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct SignupDataDoc {
    pub email: String,
    pub password: String,
    pub name: String,
    /// `student` or `employer`
    pub r#type: Option<String>,
    pub mobile: Option<String>,
    pub companyName: Option<String>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct AuthRequestDoc {
    /// `signup` or `signin`
    pub action: String,
    pub userData: SignupDataDoc,
}

#[derive(ToSchema)]
pub struct LoginRequestDoc { pub email: String, pub password: String }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct UserDoc {
    pub id: String,
    pub email: String,
    pub name: String,
    pub r#type: Option<String>,
    pub createdAt: String,
}

#[derive(ToSchema)]
pub struct UserEnvelopeDoc { pub success: bool, pub message: String, pub user: UserDoc }

#[derive(ToSchema)]
pub struct NewJobDoc {
    pub title: String,
    pub company: String,
    pub location: String,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub requirements: Option<Vec<String>>,
    pub responsibilities: Option<Vec<String>>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct JobDoc {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub tags: Vec<String>,
    pub description: String,
    pub requirements: Vec<String>,
    pub responsibilities: Vec<String>,
    pub postedAt: String,
}

#[derive(ToSchema)]
pub struct JobEnvelopeDoc { pub success: bool, pub message: Option<String>, pub job: JobDoc }

#[derive(ToSchema)]
pub struct JobsEnvelopeDoc { pub success: bool, pub jobs: Vec<JobDoc> }

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ApplicationFormDoc {
    pub jobId: String,
    pub userId: Option<String>,
    #[schema(rename = "cover-letter")]
    pub cover_letter: String,
    pub phone: String,
    /// Accepted but not stored
    #[schema(value_type = Option<String>, format = Binary)]
    pub resume: Option<Vec<u8>>,
}

#[derive(ToSchema)]
#[allow(non_snake_case)]
pub struct ApplicationDoc {
    pub id: String,
    pub jobId: String,
    pub userId: String,
    pub coverLetter: String,
    pub phone: String,
    pub resumeUrl: String,
    pub status: String,
    pub appliedAt: String,
}

#[derive(ToSchema)]
pub struct ApplicationEnvelopeDoc { pub success: bool, pub message: String, pub application: ApplicationDoc }

#[derive(ToSchema)]
pub struct ApplicationsEnvelopeDoc { pub success: bool, pub applications: Vec<ApplicationDoc> }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::auth,
        crate::routes::auth::login,
        crate::routes::jobs::list,
        crate::routes::jobs::create,
        crate::routes::jobs::get,
        crate::routes::applications::submit,
        crate::routes::applications::list,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorEnvelopeDoc,
            SignupDataDoc,
            AuthRequestDoc,
            LoginRequestDoc,
            UserDoc,
            UserEnvelopeDoc,
            NewJobDoc,
            JobDoc,
            JobEnvelopeDoc,
            JobsEnvelopeDoc,
            ApplicationFormDoc,
            ApplicationDoc,
            ApplicationEnvelopeDoc,
            ApplicationsEnvelopeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "jobs"),
        (name = "applications")
    )
)]
pub struct ApiDoc;
