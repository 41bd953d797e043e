pub mod advice;
pub mod answer;
pub mod option;
pub mod patient;
pub mod response;
pub mod template;
