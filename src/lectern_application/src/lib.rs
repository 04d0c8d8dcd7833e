pub mod use_cases;

pub use use_cases::{
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    confirm_password_reset::{ConfirmPasswordResetError, ConfirmPasswordResetUseCase},
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    request_password_reset::{
        RESET_TOKEN_TTL_SECONDS, RequestPasswordResetError, RequestPasswordResetUseCase,
    },
};
