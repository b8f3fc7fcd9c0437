// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! External interface of the contest registry.
//!
//! Handlers take plain `serde` request structs, run them against a
//! [`Persistence`](school_contest_persistence::Persistence) store and
//! return response structs or an [`ApiError`]. Domain, core and
//! persistence errors never cross this boundary untranslated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod aggregate;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use aggregate::AggregateKind;
pub use error::{
    ApiError, ErrorKind, rules, translate_core_error, translate_domain_error,
    translate_persistence_error,
};
pub use handlers::{
    create_contest, create_group, create_school, create_village, delete_candidate,
    delete_contest, delete_group, delete_result, delete_school, delete_village, describe_entity,
    enroll_candidate, get_aggregate, get_ranking, list_candidates, list_contests, list_groups,
    list_results, list_schools, list_villages, register_candidate, revise_contest,
    submit_result, update_result,
};
pub use request_response::{
    CandidateInfo, ContestInfo, CreateContestRequest, CreateContestResponse, CreateGroupRequest,
    CreateGroupResponse, CreateSchoolRequest, CreateSchoolResponse, CreateVillageRequest,
    CreateVillageResponse, DeleteResponse, DescribeEntityResponse, EnrollCandidateRequest,
    EnrollCandidateResponse, GetAggregateResponse, GetRankingResponse, GroupInfo,
    ListCandidatesRequest, ListCandidatesResponse, ListContestsRequest, ListContestsResponse,
    ListGroupsRequest, ListGroupsResponse, ListResultsResponse, ListSchoolsResponse,
    ListVillagesResponse, RegisterCandidateRequest, RegisterCandidateResponse, ResultInfo,
    ReviseContestRequest, ReviseContestResponse, SchoolInfo, SubmitResultRequest,
    SubmitResultResponse, UpdateResultRequest, UpdateResultResponse, VillageInfo,
};
